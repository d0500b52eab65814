//! Unit tests for form input validation.

use super::*;

#[test]
fn login_requires_both_fields() {
    let errors = LoginInput {
        email: "",
        password: "",
    }
    .validate();
    assert_eq!(errors.get("email"), Some(&ValidationError::Required));
    assert_eq!(errors.get("password"), Some(&ValidationError::Required));

    let ok = LoginInput {
        email: "jane@example.com",
        password: "secret",
    }
    .validate();
    assert!(ok.is_empty());
}

#[test]
fn signup_checks_email_and_confirmation() {
    let errors = SignupInput {
        full_name: "Jane Doe",
        email: "not-an-email",
        password: "secret",
        confirm_password: "different",
    }
    .validate();
    assert_eq!(errors.get("email"), Some(&ValidationError::InvalidEmail));
    assert_eq!(
        errors.get("confirm_password"),
        Some(&ValidationError::PasswordMismatch)
    );

    let ok = SignupInput {
        full_name: "Jane Doe",
        email: "jane@example.com",
        password: "secret",
        confirm_password: "secret",
    }
    .validate();
    assert!(ok.is_empty());
}

#[test]
fn customer_checks_digit_fields() {
    let errors = CustomerInput {
        name: "Jane Doe",
        phone_number: "12345",
        email: "jane@example.com",
        address: "1 Main St",
        aadhar_number: "12345678901a",
        dob: "1990-01-01",
    }
    .validate();
    assert!(matches!(
        errors.get("phone_number"),
        Some(ValidationError::InvalidFormat(_))
    ));
    assert!(matches!(
        errors.get("aadhar_number"),
        Some(ValidationError::InvalidFormat(_))
    ));
}

#[test]
fn account_number_length_is_bounded() {
    let mut input = AccountInput {
        account_number: "123456789",
        aadhar_number: "123456789012",
        ifsc_code: "SBIN0001234",
        phone_number_linked: "9876543210",
        amount: "100.0",
        bank_name: "SwiftBank",
        name_on_account: "Jane Doe",
    };
    assert!(matches!(
        input.validate().get("account_number"),
        Some(ValidationError::InvalidFormat(_))
    ));

    input.account_number = "1234567890";
    assert!(input.validate().is_empty());
}

#[test]
fn transaction_rejects_self_transfer_and_bad_amounts() {
    let base = TransactionInput {
        sender_account_number: "1234567890",
        receiver_account_number: "1234567890",
        amount: "100",
        transaction_type: "TRANSFER",
        pin: "1234",
    };
    assert!(matches!(
        base.validate().get("receiver_account_number"),
        Some(ValidationError::Other(_))
    ));

    let over_cap = TransactionInput {
        receiver_account_number: "0987654321",
        amount: "2000000",
        ..base.clone()
    };
    assert!(matches!(
        over_cap.validate().get("amount"),
        Some(ValidationError::Other(_))
    ));

    let negative = TransactionInput {
        receiver_account_number: "0987654321",
        amount: "-5",
        ..base.clone()
    };
    assert!(matches!(
        negative.validate().get("amount"),
        Some(ValidationError::InvalidFormat(_))
    ));

    let ok = TransactionInput {
        receiver_account_number: "0987654321",
        ..base
    };
    assert!(ok.validate().is_empty());
}

#[test]
fn transaction_pin_must_be_four_digits() {
    let input = TransactionInput {
        sender_account_number: "1234567890",
        receiver_account_number: "0987654321",
        amount: "50",
        transaction_type: "TRANSFER",
        pin: "12ab",
    };
    assert!(matches!(
        input.validate().get("pin"),
        Some(ValidationError::InvalidFormat(_))
    ));
}
