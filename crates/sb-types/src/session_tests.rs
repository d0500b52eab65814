//! Unit tests for the session sum type and its derived flag view.

use super::*;

fn admin_user() -> SessionUser {
    SessionUser {
        email: "admin@bank.com".to_string(),
        full_name: "System Administrator".to_string(),
        role: ROLE_ADMIN.to_string(),
    }
}

fn regular_user() -> SessionUser {
    SessionUser {
        email: "jane@example.com".to_string(),
        full_name: "Jane Doe".to_string(),
        role: ROLE_USER.to_string(),
    }
}

#[test]
fn admin_flags_imply_authenticated() {
    let flags = Session::admin(admin_user()).flags();
    assert!(flags.is_authenticated);
    assert!(flags.is_admin);
    assert!(!flags.has_customer_record);
}

#[test]
fn regular_flags_carry_record_state() {
    let with = Session::regular(regular_user(), true).flags();
    assert!(with.is_authenticated);
    assert!(!with.is_admin);
    assert!(with.has_customer_record);

    let without = Session::regular(regular_user(), false).flags();
    assert!(!without.has_customer_record);
}

#[test]
fn signed_out_flags_are_all_false() {
    assert_eq!(SessionFlags::of(None), SessionFlags::default());
}

#[test]
fn customers_visibility_policy() {
    // Admins always, regular users only until they own a record.
    assert!(Session::admin(admin_user()).can_view_customers());
    assert!(Session::regular(regular_user(), false).can_view_customers());
    assert!(!Session::regular(regular_user(), true).can_view_customers());
}

#[test]
fn auth_user_converts_to_regular_identity() {
    let user: SessionUser = crate::auth::AuthUser {
        id: "USR_1".to_string(),
        full_name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        created_at: None,
    }
    .into();
    assert_eq!(user.role, ROLE_USER);
    assert_eq!(user.email, "jane@example.com");
}
