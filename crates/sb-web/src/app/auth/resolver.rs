//! Credential resolver and customer-record probe.
//!
//! The resolver decides whether submitted credentials make an admin session
//! (matched locally, no backend call), a regular session (delegated to
//! `POST /auth/login`), or a failure. The pure classification lives in
//! [`admin_override`] and [`classify`]; only [`resolve`] touches the
//! network.

use sb_types::auth::{ApiEnvelope, AuthUser, CustomerCheck, LoginRequest};
use sb_types::session::{Session, SessionUser, ROLE_ADMIN};

use crate::app::api;
use crate::error::ApiError;

// Known defect carried over from the system this replaces: the distinguished
// admin account is validated client-side against constants. The backend has
// no admin login endpoint to delegate to. Confined to this module.
pub const ADMIN_EMAIL: &str = "admin@bank.com";
pub const ADMIN_PASSWORD: &str = "Admin@123";

/// How a login attempt resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    Admin(SessionUser),
    Regular(AuthUser),
    Failed(LoginError),
}

/// User-facing login failures.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginError {
    /// The backend rejected the credentials.
    InvalidCredentials(String),
    /// The backend could not be reached at all.
    Unreachable,
    /// Anything else (server error, malformed response).
    Other,
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials(message) => write!(f, "{}", message),
            LoginError::Unreachable => {
                write!(f, "Cannot connect to server. Ensure backend is running.")
            }
            LoginError::Other => write!(f, "Login failed. Please try again."),
        }
    }
}

/// The admin short-circuit: both constants must match exactly.
pub fn admin_override(email: &str, password: &str) -> Option<SessionUser> {
    if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
        Some(SessionUser {
            email: ADMIN_EMAIL.to_string(),
            full_name: "System Administrator".to_string(),
            role: ROLE_ADMIN.to_string(),
        })
    } else {
        None
    }
}

/// Classify the backend's answer to a delegated login.
pub fn classify(result: Result<ApiEnvelope<AuthUser>, ApiError>) -> LoginOutcome {
    match result {
        Ok(envelope) => match (envelope.success, envelope.data) {
            (true, Some(user)) => LoginOutcome::Regular(user),
            _ => {
                let message = if envelope.message.is_empty() {
                    "Invalid email or password".to_string()
                } else {
                    envelope.message
                };
                LoginOutcome::Failed(LoginError::InvalidCredentials(message))
            }
        },
        Err(ApiError::Unreachable) => LoginOutcome::Failed(LoginError::Unreachable),
        Err(ApiError::Rejected { message }) => {
            LoginOutcome::Failed(LoginError::InvalidCredentials(message))
        }
        Err(ApiError::Status { code: 401 }) => LoginOutcome::Failed(
            LoginError::InvalidCredentials("Invalid email or password".to_string()),
        ),
        Err(_) => LoginOutcome::Failed(LoginError::Other),
    }
}

/// Resolve submitted credentials to a login outcome. Performs no storage
/// writes; the caller persists the resulting session.
pub async fn resolve(email: &str, password: &str) -> LoginOutcome {
    if let Some(user) = admin_override(email, password) {
        return LoginOutcome::Admin(user);
    }

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    classify(api::auth::login(&request).await)
}

/// Collapse a customer-check answer to the record flag.
///
/// Best-effort: a transport failure, a rejected check, or a missing payload
/// all default to "no record" so login always completes.
pub fn classify_probe(result: Result<ApiEnvelope<CustomerCheck>, ApiError>) -> bool {
    match result {
        Ok(envelope) => {
            envelope.success
                && envelope
                    .data
                    .map(|check| check.has_customer_record)
                    .unwrap_or(false)
        }
        Err(err) => {
            tracing::warn!(error = %err, "customer check failed, defaulting to no customer record");
            false
        }
    }
}

/// One-shot customer-record probe, run after a successful regular login.
/// The result is cached into the session and not re-queried until the next
/// login.
pub async fn probe(email: &str) -> bool {
    classify_probe(api::auth::check_customer(email).await)
}

/// Full login flow: resolve, then probe for regular users, then assemble the
/// session. The probe is sequenced strictly after login success and uses the
/// submitted email.
pub async fn login_flow(email: &str, password: &str) -> Result<Session, LoginError> {
    match resolve(email, password).await {
        LoginOutcome::Admin(user) => Ok(Session::admin(user)),
        LoginOutcome::Regular(user) => {
            let has_customer_record = probe(email).await;
            Ok(Session::regular(user.into(), has_customer_record))
        }
        LoginOutcome::Failed(err) => Err(err),
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
