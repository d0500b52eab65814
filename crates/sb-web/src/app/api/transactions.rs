//! Transaction endpoints.

use sb_types::bank::Transaction;

use crate::app::api::client::{expect_data, get_envelope, post_envelope};
use crate::error::ApiError;

pub async fn list_transactions() -> Result<Vec<Transaction>, ApiError> {
    expect_data(get_envelope("/transaction/all").await?)
}

pub async fn list_transactions_by_account(account_number: &str) -> Result<Vec<Transaction>, ApiError> {
    expect_data(
        get_envelope(&format!(
            "/transaction/getTransactionsByAccountNumber/{}",
            account_number
        ))
        .await?,
    )
}

/// Record a transaction; the payload of the envelope is the new transaction id.
pub async fn create_transaction(transaction: &Transaction) -> Result<String, ApiError> {
    expect_data(post_envelope("/transaction/createTransaction", transaction).await?)
}
