//! Auth endpoints: login, signup, and the customer-record check.

use gloo_net::http::Request;

use sb_types::auth::{ApiEnvelope, AuthUser, CustomerCheck, LoginRequest, SignupRequest};

use crate::app::api::client::{self, post_envelope, read_envelope};
use crate::error::ApiError;

/// `POST /auth/login`. The envelope is returned as-is so the credential
/// resolver can classify success, rejection, and transport failure itself.
pub async fn login(request: &LoginRequest) -> Result<ApiEnvelope<AuthUser>, ApiError> {
    post_envelope("/auth/login", request).await
}

/// `POST /auth/signup`.
pub async fn signup(request: &SignupRequest) -> Result<ApiEnvelope<AuthUser>, ApiError> {
    post_envelope("/auth/signup", request).await
}

/// `GET /auth/check-customer?email=...`.
pub async fn check_customer(email: &str) -> Result<ApiEnvelope<CustomerCheck>, ApiError> {
    let response = Request::get(&client::url("/auth/check-customer"))
        .query([("email", email)])
        .send()
        .await
        .map_err(ApiError::unreachable)?;
    read_envelope(response).await
}
