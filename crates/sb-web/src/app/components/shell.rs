use dioxus::prelude::*;

use crate::app::auth::context::AuthState;
use crate::app::auth::hooks::{sign_out, use_auth};
use crate::app::guard::paths;
use crate::app::nav;
use crate::Routes;

/// Authenticated shell: sidebar navigation plus the page content.
///
/// Nav items are derived fresh from the session flags on every render, so a
/// session change reshapes the sidebar without any cache to invalidate.
/// Active highlighting is an exact path match.
#[component]
pub fn Shell(children: Element) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let current_path = use_route::<Routes>().to_string();

    // Other tabs announce session changes through the storage event.
    use_hook(|| listen_for_storage(auth));

    let state = auth.read();
    let items = nav::visible_items(state.flags());
    let (name, role) = match state.session.as_ref() {
        Some(session) => (
            session.user().full_name.clone(),
            session.user().role.clone(),
        ),
        None => (String::new(), String::new()),
    };
    drop(state);

    let on_logout = move |_| {
        sign_out(auth);
        navigator.push(paths::LOGIN);
    };

    rsx! {
        div { class: "flex min-h-screen bg-base-200",
            aside { class: "w-64 bg-base-100 shadow-md flex flex-col",
                div { class: "p-4 text-xl font-bold", "SwiftBank" }
                ul { class: "menu flex-grow px-2",
                    for item in items {
                        li {
                            Link {
                                class: if nav::is_active(&item, &current_path) { "active" } else { "" },
                                to: item.path,
                                "{item.label}"
                            }
                        }
                    }
                }
                div { class: "p-4 border-t border-base-200",
                    div { class: "font-semibold truncate", "{name}" }
                    div { class: "text-sm text-base-content/60", "{role}" }
                    button {
                        class: "btn btn-outline btn-sm w-full mt-3",
                        onclick: on_logout,
                        "Logout"
                    }
                }
            }
            main { class: "flex-grow p-6", {children} }
        }
    }
}

#[cfg(feature = "web")]
fn listen_for_storage(auth: Signal<AuthState>) {
    use std::sync::Once;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    // The shell remounts on every navigation; the listener is app-wide.
    static ATTACHED: Once = Once::new();
    if ATTACHED.is_completed() {
        return;
    }
    ATTACHED.call_once(|| ());

    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        crate::app::auth::hooks::refresh_from_storage(auth);
    });
    if window
        .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!("could not attach storage listener; cross-tab sync disabled");
    }
    // Leak the closure so the listener survives this component.
    callback.forget();
}

#[cfg(not(feature = "web"))]
fn listen_for_storage(_auth: Signal<AuthState>) {}
