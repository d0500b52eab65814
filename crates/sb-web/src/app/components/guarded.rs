use dioxus::prelude::*;

use crate::app::auth::hooks::use_auth;
use crate::app::guard::{evaluate, Decision, Guard};
use crate::Routes;

/// Route guard wrapper.
///
/// Evaluates the guard against the current session flags on every render and
/// pushes the redirect through the navigator. Guarded content is never
/// rendered while a redirect is pending.
///
/// ```text
/// Guarded { guard: Guard::Admin, AdminPage {} }
/// ```
#[component]
pub fn Guarded(guard: Guard, children: Element) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let path = use_route::<Routes>().to_string();

    let decision = evaluate(guard, auth.read().flags(), &path);

    let effect_path = path.clone();
    use_effect(move || {
        if let Decision::Redirect(target) = evaluate(guard, auth.read().flags(), &effect_path) {
            navigator.push(target);
        }
    });

    match decision {
        Decision::Render => rsx! { {children} },
        Decision::Redirect(_) => rsx! { div {} },
    }
}
