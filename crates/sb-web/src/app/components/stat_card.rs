use dioxus::prelude::*;

#[component]
pub fn StatCard(title: String, value: String, subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "stat bg-base-100 rounded-box shadow",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value text-2xl", "{value}" }
            if let Some(subtitle) = subtitle {
                div { class: "stat-desc", "{subtitle}" }
            }
        }
    }
}
