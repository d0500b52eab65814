//! Bank-simulator domain records as exposed by the REST backend.
//!
//! Field names are camelCase on the wire; identifiers are backend-assigned
//! and therefore optional on create payloads.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub aadhar_number: String,
    pub dob: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub account_number: String,
    pub aadhar_number: String,
    pub ifsc_code: String,
    pub phone_number_linked: String,
    pub amount: f64,
    pub bank_name: String,
    pub name_on_account: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub sender_account_number: String,
    pub receiver_account_number: String,
    pub amount: f64,
    pub transaction_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub pin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
}
