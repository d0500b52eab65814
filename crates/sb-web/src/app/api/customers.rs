//! Customer endpoints.

use sb_types::bank::Customer;
use serde_json::Value;

use crate::app::api::client::{delete_envelope, expect_data, expect_success, get_envelope, post_envelope, put_envelope};
use crate::error::ApiError;

pub async fn list_customers() -> Result<Vec<Customer>, ApiError> {
    expect_data(get_envelope("/customer/all").await?)
}

/// Onboard a new customer; the payload of the envelope is the new customer id.
pub async fn onboard_customer(customer: &Customer) -> Result<String, ApiError> {
    expect_data(post_envelope("/customer/onboard", customer).await?)
}

pub async fn update_customer(customer_id: &str, customer: &Customer) -> Result<(), ApiError> {
    expect_success::<Value>(put_envelope(&format!("/customer/{}", customer_id), customer).await?)
}

pub async fn delete_customer(aadhar_number: &str) -> Result<(), ApiError> {
    expect_success::<Value>(delete_envelope(&format!("/customer/aadhar/{}", aadhar_number)).await?)
}
