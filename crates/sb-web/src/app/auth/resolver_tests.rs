//! Unit tests for the credential resolver's pure classification.

use sb_types::auth::ApiEnvelope;

use super::*;

fn envelope<T>(success: bool, message: &str, data: Option<T>) -> ApiEnvelope<T> {
    ApiEnvelope {
        success,
        message: message.to_string(),
        data,
        timestamp: None,
    }
}

fn record_check(has_customer_record: bool) -> CustomerCheck {
    CustomerCheck {
        has_customer_record,
        user_id: Some("USR_1".to_string()),
        email: Some("jane@example.com".to_string()),
    }
}

fn jane() -> AuthUser {
    AuthUser {
        id: "USR_1".to_string(),
        full_name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        created_at: None,
    }
}

#[test]
fn admin_constants_short_circuit_without_any_network_call() {
    // admin_override is the entire admin path; no request type is even built.
    let user = admin_override(ADMIN_EMAIL, ADMIN_PASSWORD).expect("admin session");
    assert_eq!(user.role, ROLE_ADMIN);
    assert_eq!(user.email, ADMIN_EMAIL);
}

#[test]
fn near_miss_credentials_do_not_match_admin() {
    assert!(admin_override(ADMIN_EMAIL, "Admin@124").is_none());
    assert!(admin_override("admin@bank.org", ADMIN_PASSWORD).is_none());
    assert!(admin_override("", "").is_none());
}

#[test]
fn backend_success_resolves_to_a_regular_session() {
    let outcome = classify(Ok(envelope(true, "Login successful", Some(jane()))));
    assert_eq!(outcome, LoginOutcome::Regular(jane()));
}

#[test]
fn backend_rejection_passes_its_message_through() {
    let outcome = classify(Ok(envelope(false, "Account is locked", None)));
    assert_eq!(
        outcome,
        LoginOutcome::Failed(LoginError::InvalidCredentials("Account is locked".to_string()))
    );
}

#[test]
fn rejection_without_message_gets_the_generic_one() {
    let outcome = classify(Ok(envelope(false, "", None)));
    assert_eq!(
        outcome,
        LoginOutcome::Failed(LoginError::InvalidCredentials(
            "Invalid email or password".to_string()
        ))
    );
}

#[test]
fn success_flag_without_data_is_still_a_failure() {
    let outcome = classify(Ok(envelope(true, "", None)));
    assert!(matches!(
        outcome,
        LoginOutcome::Failed(LoginError::InvalidCredentials(_))
    ));
}

#[test]
fn transport_failure_is_distinct_from_credential_failure() {
    assert_eq!(
        classify(Err(ApiError::Unreachable)),
        LoginOutcome::Failed(LoginError::Unreachable)
    );
}

#[test]
fn unauthorized_status_maps_to_invalid_credentials() {
    assert_eq!(
        classify(Err(ApiError::Status { code: 401 })),
        LoginOutcome::Failed(LoginError::InvalidCredentials(
            "Invalid email or password".to_string()
        ))
    );
}

#[test]
fn server_errors_map_to_the_generic_failure() {
    assert_eq!(
        classify(Err(ApiError::Status { code: 500 })),
        LoginOutcome::Failed(LoginError::Other)
    );
}

#[test]
fn probe_reports_the_record_flag_on_success() {
    assert!(classify_probe(Ok(envelope(true, "", Some(record_check(true))))));
    assert!(!classify_probe(Ok(envelope(true, "", Some(record_check(false))))));
}

#[test]
fn probe_transport_failure_defaults_to_no_record() {
    assert!(!classify_probe(Err(ApiError::Unreachable)));
    assert!(!classify_probe(Err(ApiError::Status { code: 500 })));
}

#[test]
fn probe_rejection_or_missing_payload_defaults_to_no_record() {
    // A rejected check is not trusted even if it carries a payload.
    assert!(!classify_probe(Ok(envelope(
        false,
        "check failed",
        Some(record_check(true))
    ))));
    assert!(!classify_probe(Ok(envelope(true, "", None::<CustomerCheck>))));
}
