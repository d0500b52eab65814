use std::{collections::HashMap, fmt};

/// High-level validation errors produced by the form input checks.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Required,
    InvalidEmail,
    PasswordMismatch,
    InvalidFormat(String),
    Other(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "This field is required"),
            ValidationError::InvalidEmail => write!(f, "Enter a valid email address"),
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
            ValidationError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            ValidationError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// Render a human-readable string from a map of validation errors.
pub fn format_errors(errors: &HashMap<String, ValidationError>) -> String {
    errors
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn require(errors: &mut HashMap<String, ValidationError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), ValidationError::Required);
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

/// Login form input. Both fields are required before any network call is
/// made; empty submissions never reach the backend.
#[derive(Debug, Clone, Default)]
pub struct LoginInput<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> LoginInput<'a> {
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();
        require(&mut errors, "email", self.email);
        require(&mut errors, "password", self.password);
        errors
    }
}

/// Signup form input.
#[derive(Debug, Clone, Default)]
pub struct SignupInput<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

impl<'a> SignupInput<'a> {
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();
        require(&mut errors, "full_name", self.full_name);
        require(&mut errors, "email", self.email);
        require(&mut errors, "password", self.password);
        if !self.email.trim().is_empty() && !looks_like_email(self.email) {
            errors.insert("email".to_string(), ValidationError::InvalidEmail);
        }
        if !self.password.is_empty() && self.password != self.confirm_password {
            errors.insert(
                "confirm_password".to_string(),
                ValidationError::PasswordMismatch,
            );
        }
        errors
    }
}

/// Customer onboarding form input.
#[derive(Debug, Clone, Default)]
pub struct CustomerInput<'a> {
    pub name: &'a str,
    pub phone_number: &'a str,
    pub email: &'a str,
    pub address: &'a str,
    pub aadhar_number: &'a str,
    pub dob: &'a str,
}

impl<'a> CustomerInput<'a> {
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();
        require(&mut errors, "name", self.name);
        require(&mut errors, "phone_number", self.phone_number);
        require(&mut errors, "email", self.email);
        require(&mut errors, "address", self.address);
        require(&mut errors, "aadhar_number", self.aadhar_number);
        require(&mut errors, "dob", self.dob);

        if !self.email.trim().is_empty() && !looks_like_email(self.email) {
            errors.insert("email".to_string(), ValidationError::InvalidEmail);
        }
        if !self.phone_number.trim().is_empty() && !is_digits(self.phone_number, 10) {
            errors.insert(
                "phone_number".to_string(),
                ValidationError::InvalidFormat("phone number must be 10 digits".to_string()),
            );
        }
        if !self.aadhar_number.trim().is_empty() && !is_digits(self.aadhar_number, 12) {
            errors.insert(
                "aadhar_number".to_string(),
                ValidationError::InvalidFormat("aadhar number must be 12 digits".to_string()),
            );
        }
        errors
    }
}

/// Account creation/edit form input. Amounts arrive as raw text from the
/// form control and are parsed here.
#[derive(Debug, Clone, Default)]
pub struct AccountInput<'a> {
    pub account_number: &'a str,
    pub aadhar_number: &'a str,
    pub ifsc_code: &'a str,
    pub phone_number_linked: &'a str,
    pub amount: &'a str,
    pub bank_name: &'a str,
    pub name_on_account: &'a str,
}

impl<'a> AccountInput<'a> {
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();
        require(&mut errors, "account_number", self.account_number);
        require(&mut errors, "aadhar_number", self.aadhar_number);
        require(&mut errors, "ifsc_code", self.ifsc_code);
        require(&mut errors, "phone_number_linked", self.phone_number_linked);
        require(&mut errors, "bank_name", self.bank_name);
        require(&mut errors, "name_on_account", self.name_on_account);

        let number = self.account_number.trim();
        if !number.is_empty() && (number.len() < 10 || number.len() > 20) {
            errors.insert(
                "account_number".to_string(),
                ValidationError::InvalidFormat(
                    "account number must be 10-20 characters".to_string(),
                ),
            );
        }
        if !self.aadhar_number.trim().is_empty() && !is_digits(self.aadhar_number, 12) {
            errors.insert(
                "aadhar_number".to_string(),
                ValidationError::InvalidFormat("aadhar number must be 12 digits".to_string()),
            );
        }
        match self.amount.trim().parse::<f64>() {
            Ok(value) if value >= 0.0 => {}
            _ => {
                errors.insert(
                    "amount".to_string(),
                    ValidationError::InvalidFormat("amount must be a non-negative number".to_string()),
                );
            }
        }
        errors
    }
}

/// Record-transaction form input.
#[derive(Debug, Clone, Default)]
pub struct TransactionInput<'a> {
    pub sender_account_number: &'a str,
    pub receiver_account_number: &'a str,
    pub amount: &'a str,
    pub transaction_type: &'a str,
    pub pin: &'a str,
}

/// Backend cap on a single transaction.
pub const MAX_TRANSACTION_AMOUNT: f64 = 1_000_000.0;

impl<'a> TransactionInput<'a> {
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();
        require(&mut errors, "sender_account_number", self.sender_account_number);
        require(&mut errors, "receiver_account_number", self.receiver_account_number);
        require(&mut errors, "transaction_type", self.transaction_type);
        require(&mut errors, "pin", self.pin);

        let sender = self.sender_account_number.trim();
        let receiver = self.receiver_account_number.trim();
        if !sender.is_empty() && sender == receiver {
            errors.insert(
                "receiver_account_number".to_string(),
                ValidationError::Other("Sender and receiver accounts must differ".to_string()),
            );
        }
        if !self.pin.trim().is_empty() && !is_digits(self.pin.trim(), 4) {
            errors.insert(
                "pin".to_string(),
                ValidationError::InvalidFormat("PIN must be 4 digits".to_string()),
            );
        }
        match self.amount.trim().parse::<f64>() {
            Ok(value) if value > 0.0 && value <= MAX_TRANSACTION_AMOUNT => {}
            Ok(value) if value > MAX_TRANSACTION_AMOUNT => {
                errors.insert(
                    "amount".to_string(),
                    ValidationError::Other(format!(
                        "Transaction amount cannot exceed {}",
                        MAX_TRANSACTION_AMOUNT
                    )),
                );
            }
            _ => {
                errors.insert(
                    "amount".to_string(),
                    ValidationError::InvalidFormat("amount must be a positive number".to_string()),
                );
            }
        }
        errors
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
