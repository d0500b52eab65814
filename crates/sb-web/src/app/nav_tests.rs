//! Unit tests for sidebar item filtering.

use super::*;

fn flags(is_admin: bool, has_record: bool) -> SessionFlags {
    SessionFlags {
        is_authenticated: true,
        is_admin,
        has_customer_record: has_record,
    }
}

#[test]
fn base_items_are_always_present_in_order() {
    let items = visible_items(flags(false, true));
    assert_eq!(items, vec![DASHBOARD, ACCOUNTS, TRANSACTIONS]);
}

#[test]
fn customers_is_hidden_once_a_record_exists() {
    assert!(visible_items(flags(false, false)).contains(&CUSTOMERS));
    assert!(!visible_items(flags(false, true)).contains(&CUSTOMERS));
}

#[test]
fn admins_always_see_customers() {
    assert!(visible_items(flags(true, false)).contains(&CUSTOMERS));
    // A stray record flag cannot hide it for admins.
    assert!(visible_items(flags(true, true)).contains(&CUSTOMERS));
}

#[test]
fn active_match_is_exact() {
    assert!(is_active(&ACCOUNTS, "/accounts"));
    assert!(!is_active(&ACCOUNTS, "/accounts/123"));
    assert!(!is_active(&ACCOUNTS, "/account"));
}
