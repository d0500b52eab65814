use dioxus::prelude::*;

/// Public shell for the unauthenticated pages (home, login, signup).
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            class: "sb-layout min-h-screen flex flex-col bg-base-200",
            header { class: "navbar bg-base-100 shadow-sm",
                div { class: "flex-1",
                    Link { class: "btn btn-ghost text-xl", to: "/", "SwiftBank" }
                }
            }
            main {
                class: "sb-main flex-grow p-4", {
                    children
                }
            }
            Footer {}
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer footer-center p-4 text-base-content/60 text-sm",
            p { "SwiftBank admin console" }
        }
    }
}
