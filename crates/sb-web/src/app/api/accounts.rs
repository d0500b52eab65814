//! Account endpoints.

use sb_types::bank::Account;
use serde_json::Value;

use crate::app::api::client::{delete_envelope, expect_data, expect_success, get_envelope, post_envelope, put_envelope};
use crate::error::ApiError;

pub async fn list_accounts() -> Result<Vec<Account>, ApiError> {
    expect_data(get_envelope("/account").await?)
}

/// Create an account; the payload of the envelope is the new account id.
pub async fn create_account(account: &Account) -> Result<String, ApiError> {
    expect_data(post_envelope("/account/add", account).await?)
}

pub async fn update_account(account_number: &str, account: &Account) -> Result<(), ApiError> {
    expect_success::<Value>(
        put_envelope(&format!("/account/number/{}", account_number), account).await?,
    )
}

pub async fn delete_account(account_number: &str) -> Result<(), ApiError> {
    expect_success::<Value>(delete_envelope(&format!("/account/number/{}", account_number)).await?)
}
