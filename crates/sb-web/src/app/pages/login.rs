use dioxus::prelude::*;
use sb_types::validation::{format_errors, LoginInput};

use crate::app::auth::hooks::{sign_in, use_auth};
use crate::app::auth::resolver::{self, ADMIN_EMAIL, ADMIN_PASSWORD};
use crate::app::guard::paths;
use crate::components::Layout;

/// Where a freshly signed-in session lands.
fn landing_path(is_admin: bool) -> &'static str {
    if is_admin {
        paths::ADMIN
    } else {
        paths::DASHBOARD
    }
}

#[component]
pub fn LoginPage() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    // Redirect away from login if already authenticated
    use_effect(move || {
        let flags = auth.read().flags();
        if flags.is_authenticated {
            navigator.push(landing_path(flags.is_admin));
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        error_message.set(None);

        let email_val = email();
        let password_val = password();

        let input = LoginInput {
            email: &email_val,
            password: &password_val,
        };
        let errors = input.validate();
        if !errors.is_empty() {
            error_message.set(Some(format_errors(&errors)));
            return;
        }

        submitting.set(true);

        spawn(async move {
            match resolver::login_flow(&email_val, &password_val).await {
                Ok(session) => {
                    let is_admin = session.is_admin();
                    sign_in(auth, session);
                    navigator.push(landing_path(is_admin));
                }
                Err(err) => {
                    error_message.set(Some(err.to_string()));
                }
            }

            submitting.set(false);
        });
    };

    rsx! {
        Layout {
            div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
                div { class: "card w-96 bg-base-100 shadow-xl",
                    div { class: "card-body",
                        h2 { class: "card-title justify-center mb-4", "Sign in to SwiftBank" }

                        form { onsubmit: on_submit,
                            class: "flex flex-col gap-4",
                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Email" }
                                }
                                input {
                                    r#type: "email",
                                    placeholder: "you@example.com",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{email}",
                                    oninput: move |evt| email.set(evt.value()),
                                    autocomplete: "email",
                                }
                            }

                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Password" }
                                }
                                input {
                                    r#type: "password",
                                    placeholder: "password",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                    autocomplete: "current-password",
                                }
                            }

                            if let Some(error) = error_message() {
                                div { class: "alert alert-error mt-4",
                                    span { "{error}" }
                                }
                            }

                            div { class: "card-actions justify-end mt-6",
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary w-full",
                                    disabled: submitting(),
                                    if submitting() {
                                        span { class: "loading loading-spinner" }
                                        span { "Signing in" }
                                    } else {
                                        span { "Sign in" }
                                    }
                                }
                            }
                        }

                        div { class: "divider" }

                        div { class: "text-sm text-center",
                            "No account yet? "
                            Link { class: "link link-primary", to: "/signup", "Sign up" }
                        }

                        div { class: "alert alert-info mt-4 text-xs",
                            span { "Demo admin: {ADMIN_EMAIL} / {ADMIN_PASSWORD}" }
                        }
                    }
                }
            }
        }
    }
}
