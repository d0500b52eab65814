//! API error types for the web console.
//!
//! Every backend call funnels its failures through [`ApiError`]; the
//! `Display` text is what pages show in toasts and alerts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the REST client.
#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum ApiError {
    /// The backend could not be reached at all (network/transport failure).
    /// Kept distinct from rejection so login can show a different diagnostic.
    #[error("Cannot connect to server. Ensure backend is running.")]
    Unreachable,

    /// The backend processed the request and said no.
    #[error("{message}")]
    Rejected { message: String },

    /// Non-2xx status without a parseable error envelope.
    #[error("Request failed with status {code}")]
    Status { code: u16 },

    /// The response body did not match the expected shape.
    #[error("Unexpected response from server")]
    Decode { message: String },
}

impl ApiError {
    /// Convenience constructor for rejection errors.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Map a transport-level failure, logging the underlying cause.
    pub fn unreachable(err: impl std::fmt::Display) -> Self {
        tracing::warn!(error = %err, "backend unreachable");
        Self::Unreachable
    }

    /// Map a payload decode failure, logging the underlying cause.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        let message = err.to_string();
        tracing::warn!(error = %message, "failed to decode backend response");
        Self::Decode { message }
    }
}
