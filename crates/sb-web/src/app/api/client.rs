//! Shared plumbing for the bank-simulator REST client: base URL, envelope
//! decoding, and the verb helpers the resource modules build on.

use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use sb_types::auth::ApiEnvelope;

use crate::error::ApiError;

/// Backend base URL. Overridable at build time for deployments.
pub const API_BASE: &str = match option_env!("SB_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8080/bank-simulator/api",
};

pub(crate) fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// Decode a response into the standard envelope.
///
/// The backend serves its envelope on error statuses too (with `success:
/// false` and a message), so decoding is attempted regardless of status; a
/// non-2xx body that is not an envelope becomes [`ApiError::Status`].
pub(crate) async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiEnvelope<T>, ApiError> {
    let status = response.status();
    let ok = response.ok();
    match response.json::<ApiEnvelope<T>>().await {
        Ok(envelope) => Ok(envelope),
        Err(_) if !ok => Err(ApiError::Status { code: status }),
        Err(err) => Err(ApiError::decode(err)),
    }
}

/// Unwrap an envelope payload, converting backend rejection into an error.
pub(crate) fn expect_data<T>(envelope: ApiEnvelope<T>) -> Result<T, ApiError> {
    envelope.into_data().map_err(ApiError::rejected)
}

/// Check an envelope for success when the payload is irrelevant.
pub(crate) fn expect_success<T>(envelope: ApiEnvelope<T>) -> Result<(), ApiError> {
    if envelope.success {
        Ok(())
    } else if envelope.message.is_empty() {
        Err(ApiError::rejected("request failed"))
    } else {
        Err(ApiError::Rejected {
            message: envelope.message,
        })
    }
}

pub(crate) async fn get_envelope<T: DeserializeOwned>(
    path: &str,
) -> Result<ApiEnvelope<T>, ApiError> {
    let response = Request::get(&url(path))
        .send()
        .await
        .map_err(ApiError::unreachable)?;
    read_envelope(response).await
}

pub(crate) async fn post_envelope<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<ApiEnvelope<T>, ApiError> {
    let response = Request::post(&url(path))
        .json(body)
        .map_err(ApiError::decode)?
        .send()
        .await
        .map_err(ApiError::unreachable)?;
    read_envelope(response).await
}

pub(crate) async fn put_envelope<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<ApiEnvelope<T>, ApiError> {
    let response = Request::put(&url(path))
        .json(body)
        .map_err(ApiError::decode)?
        .send()
        .await
        .map_err(ApiError::unreachable)?;
    read_envelope(response).await
}

pub(crate) async fn delete_envelope<T: DeserializeOwned>(
    path: &str,
) -> Result<ApiEnvelope<T>, ApiError> {
    let response = Request::delete(&url(path))
        .send()
        .await
        .map_err(ApiError::unreachable)?;
    read_envelope(response).await
}
