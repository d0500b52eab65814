//! Unit tests for the session key mapping.

use std::collections::HashMap;

use sb_types::session::{Session, SessionUser, ROLE_ADMIN, ROLE_USER};

use super::*;

fn admin_session() -> Session {
    Session::admin(SessionUser {
        email: "admin@bank.com".to_string(),
        full_name: "System Administrator".to_string(),
        role: ROLE_ADMIN.to_string(),
    })
}

fn regular_session(has_record: bool) -> Session {
    Session::regular(
        SessionUser {
            email: "jane@example.com".to_string(),
            full_name: "Jane Doe".to_string(),
            role: ROLE_USER.to_string(),
        },
        has_record,
    )
}

fn to_map(pairs: Vec<(&'static str, String)>) -> HashMap<&'static str, String> {
    pairs.into_iter().collect()
}

fn roundtrip(session: &Session) -> Option<Session> {
    let map = to_map(encode(session));
    decode(|key| map.get(key).cloned())
}

#[test]
fn encode_writes_every_key() {
    let map = to_map(encode(&admin_session()));
    assert_eq!(map.get(KEY_AUTHENTICATED).map(String::as_str), Some("true"));
    assert_eq!(map.get(KEY_ADMIN).map(String::as_str), Some("true"));
    assert_eq!(map.get(KEY_CUSTOMER_RECORD).map(String::as_str), Some("false"));
    assert!(map.contains_key(KEY_USER));
}

#[test]
fn sessions_roundtrip_through_the_key_set() {
    assert_eq!(roundtrip(&admin_session()), Some(admin_session()));
    assert_eq!(roundtrip(&regular_session(true)), Some(regular_session(true)));
    assert_eq!(roundtrip(&regular_session(false)), Some(regular_session(false)));
}

#[test]
fn missing_auth_flag_decodes_to_signed_out() {
    let mut map = to_map(encode(&regular_session(true)));
    map.remove(KEY_AUTHENTICATED);
    assert_eq!(decode(|key| map.get(key).cloned()), None);
}

#[test]
fn missing_user_decodes_to_signed_out() {
    let mut map = to_map(encode(&regular_session(false)));
    map.remove(KEY_USER);
    assert_eq!(decode(|key| map.get(key).cloned()), None);
}

#[test]
fn unparsable_user_decodes_to_signed_out() {
    let mut map = to_map(encode(&regular_session(false)));
    map.insert(KEY_USER, "{not json".to_string());
    assert_eq!(decode(|key| map.get(key).cloned()), None);
}

#[test]
fn stray_record_flag_is_ignored_for_admins() {
    let mut map = to_map(encode(&admin_session()));
    map.insert(KEY_CUSTOMER_RECORD, "true".to_string());
    let decoded = decode(|key| map.get(key).cloned()).expect("session");
    assert!(decoded.is_admin());
    assert!(!decoded.has_customer_record());
}

#[test]
fn missing_record_flag_defaults_to_false() {
    let mut map = to_map(encode(&regular_session(true)));
    map.remove(KEY_CUSTOMER_RECORD);
    let decoded = decode(|key| map.get(key).cloned()).expect("session");
    assert!(!decoded.has_customer_record());
}
