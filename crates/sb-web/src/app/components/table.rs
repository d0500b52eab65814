use dioxus::prelude::*;

/// Thin table wrapper; callers render their own `tr` rows as children.
#[component]
pub fn DataTable(headers: Vec<&'static str>, children: Element) -> Element {
    rsx! {
        div { class: "overflow-x-auto bg-base-100 rounded-box shadow",
            table { class: "table table-zebra",
                thead {
                    tr {
                        for header in headers {
                            th { "{header}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}
