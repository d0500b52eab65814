use dioxus::prelude::*;
use sb_types::auth::SignupRequest;
use sb_types::validation::{format_errors, SignupInput};

use crate::app::api;
use crate::components::Layout;
use crate::error::ApiError;

#[component]
pub fn SignupPage() -> Element {
    let navigator = use_navigator();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        error_message.set(None);

        let request = SignupRequest {
            full_name: full_name(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
        };

        let input = SignupInput {
            full_name: &request.full_name,
            email: &request.email,
            password: &request.password,
            confirm_password: &request.confirm_password,
        };
        let errors = input.validate();
        if !errors.is_empty() {
            error_message.set(Some(format_errors(&errors)));
            return;
        }

        submitting.set(true);

        spawn(async move {
            match api::auth::signup(&request).await {
                Ok(envelope) if envelope.success => {
                    navigator.push("/login");
                }
                Ok(envelope) => {
                    let message = if envelope.message.is_empty() {
                        "Signup failed. Please try again.".to_string()
                    } else {
                        envelope.message
                    };
                    error_message.set(Some(message));
                }
                Err(ApiError::Unreachable) => {
                    error_message.set(Some(
                        "Cannot connect to server. Ensure backend is running.".to_string(),
                    ));
                }
                Err(err) => {
                    error_message.set(Some(format!("Signup failed: {}", err)));
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
                        h2 { class: "card-title justify-center mb-4", "Create your account" }

                        form { onsubmit: on_submit,
                            class: "flex flex-col gap-4",
                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label", span { class: "label-text", "Full name" } }
                                input {
                                    r#type: "text",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{full_name}",
                                    oninput: move |evt| full_name.set(evt.value()),
                                    autocomplete: "name",
                                }
                            }
                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label", span { class: "label-text", "Email" } }
                                input {
                                    r#type: "email",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{email}",
                                    oninput: move |evt| email.set(evt.value()),
                                    autocomplete: "email",
                                }
                            }
                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label", span { class: "label-text", "Password" } }
                                input {
                                    r#type: "password",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                    autocomplete: "new-password",
                                }
                            }
                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label", span { class: "label-text", "Confirm password" } }
                                input {
                                    r#type: "password",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{confirm_password}",
                                    oninput: move |evt| confirm_password.set(evt.value()),
                                    autocomplete: "new-password",
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
                                        span { "Creating account" }
                                    } else {
                                        span { "Sign up" }
                                    }
                                }
                            }
                        }

                        div { class: "text-sm text-center mt-4",
                            "Already registered? "
                            Link { class: "link link-primary", to: "/login", "Sign in" }
                        }
                    }
                }
            }
        }
    }
}
