use dioxus::prelude::*;

use crate::app::{self, auth::context::use_auth_provider};

/// Root shell: seeds the auth context from storage and wraps the router.
#[component]
pub fn app_root() -> Element {
    use_auth_provider();

    rsx! {
        document::Title { "SwiftBank Admin Console" }
        // Hash suffix is disabled because it breaks when running via cargo run;
        // clean_asset_path strips the absolute prefix for the same reason.
        document::Stylesheet { href: clean_asset_path(asset!("/assets/tailwind.css", AssetOptions::builder().with_hash_suffix(false)).to_string()) }
        div {
            app::routes::AppRouter {}
        }
    }
}

pub fn clean_asset_path(path: String) -> String {
    // When running via `cargo run`, the asset! macro returns an absolute path.
    // We only want the part from /assets/ onward.
    if let Some(idx) = path.find("/assets/") {
        path[idx..].to_string()
    } else {
        path
    }
}
