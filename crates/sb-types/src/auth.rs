use serde::{Deserialize, Serialize};

/// Response wrapper returned by every bank-simulator endpoint.
///
/// `data` is absent on failures, and some endpoints omit `timestamp`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the backend accepted the request.
    pub success: bool,
    /// Human-readable status or error message.
    #[serde(default)]
    pub message: String,
    /// Payload, populated on success.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Server-side timestamp, when provided.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Extract the payload, treating a success flag without data as a failure.
    pub fn into_data(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (_, _) if !self.message.is_empty() => Err(self.message),
            _ => Err("request failed".to_string()),
        }
    }
}

/// Login payload submitted to `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email submitted by the client.
    pub email: String,
    /// Plaintext password submitted by the client.
    pub password: String,
}

/// Signup payload submitted to `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Authenticated user details returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Stable user identifier.
    pub id: String,
    /// Display name.
    pub full_name: String,
    /// Login email.
    pub email: String,
    /// Account creation timestamp, when provided.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload of `GET /auth/check-customer`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCheck {
    /// Whether a customer profile is already linked to the login identity.
    pub has_customer_record: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
