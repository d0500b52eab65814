use dioxus::prelude::*;

use crate::components::Layout;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        Layout {
            div { class: "hero min-h-[calc(100vh-16rem)]",
                div { class: "hero-content text-center",
                    div { class: "max-w-md",
                        h1 { class: "text-5xl font-bold", "SwiftBank" }
                        p { class: "py-6",
                            "Back-office console for customers, accounts and transactions."
                        }
                        div { class: "flex gap-2 justify-center",
                            Link { class: "btn btn-primary", to: "/login", "Sign in" }
                            Link { class: "btn btn-outline", to: "/signup", "Create account" }
                        }
                    }
                }
            }
        }
    }
}
