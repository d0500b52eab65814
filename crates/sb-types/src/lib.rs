//! Shared types for the SwiftBank panel.
//!
//! Wire contracts for the bank-simulator REST backend, the client session
//! model, and the form validation helpers used by the web console. This
//! crate has no UI dependencies so the session/authorization policy stays
//! unit-testable on its own.

pub mod auth;
pub mod bank;
pub mod session;
pub mod validation;
