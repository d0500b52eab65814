use dioxus::prelude::*;

use crate::components::Layout;

#[component]
pub fn NotFoundPage(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        Layout {
            div { class: "hero min-h-[calc(100vh-16rem)]",
                div { class: "hero-content text-center",
                    div {
                        h1 { class: "text-5xl font-bold", "404" }
                        p { class: "py-6", "No page at /{path}" }
                        Link { class: "btn btn-primary", to: "/", "Go home" }
                    }
                }
            }
        }
    }
}
