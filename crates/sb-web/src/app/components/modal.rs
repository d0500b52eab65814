use dioxus::prelude::*;

/// Centered dialog hosting the create/edit forms.
///
/// The caller owns the open flag; `actions` slots the save button next to
/// the always-present cancel. Dismissing never saves.
#[component]
pub fn Modal(
    open: bool,
    on_close: EventHandler<()>,
    title: String,
    children: Element,
    actions: Option<Element>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        dialog { class: "modal modal-open sm:modal-middle",
            div { class: "modal-box",
                div { class: "flex items-center justify-between",
                    h3 { class: "font-bold text-lg", "{title}" }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                div { class: "py-4", {children} }
                div { class: "modal-action",
                    if let Some(actions) = actions {
                        {actions}
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
            // Clicking the backdrop dismisses like cancel does.
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()), }
        }
    }
}
