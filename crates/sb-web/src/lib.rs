//! SwiftBank panel web entrypoint and common exports.
//!
//! This crate hosts the Dioxus-based administrative console for the
//! bank-simulator REST backend: session handling, route guarding, and the
//! customer/account/transaction pages.

pub mod app;
pub mod app_root;
pub mod error;

pub use app::routes::Routes;
pub use app::{components, pages, routes};
