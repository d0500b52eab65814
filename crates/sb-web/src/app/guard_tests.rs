//! Unit tests for the route-guard decision table.

use super::*;

const SIGNED_OUT: SessionFlags = SessionFlags {
    is_authenticated: false,
    is_admin: false,
    has_customer_record: false,
};

const ADMIN: SessionFlags = SessionFlags {
    is_authenticated: true,
    is_admin: true,
    has_customer_record: false,
};

fn regular(has_record: bool) -> SessionFlags {
    SessionFlags {
        is_authenticated: true,
        is_admin: false,
        has_customer_record: has_record,
    }
}

#[test]
fn every_guard_redirects_signed_out_users_to_login() {
    for guard in [Guard::Admin, Guard::CustomerPage, Guard::Authenticated] {
        assert_eq!(
            evaluate(guard, SIGNED_OUT, "/accounts"),
            Decision::Redirect(paths::LOGIN)
        );
    }
}

#[test]
fn admin_guard_decision_table() {
    assert_eq!(
        evaluate(Guard::Admin, regular(false), "/admin"),
        Decision::Redirect(paths::DASHBOARD)
    );
    assert_eq!(evaluate(Guard::Admin, ADMIN, "/admin"), Decision::Render);
}

#[test]
fn customer_page_guard_decision_table() {
    // Admins bypass the record check.
    assert_eq!(evaluate(Guard::CustomerPage, ADMIN, "/customers"), Decision::Render);

    // Regular users are barred once they own a record, allowed until then.
    assert_eq!(
        evaluate(Guard::CustomerPage, regular(true), "/customers"),
        Decision::Redirect(paths::DASHBOARD)
    );
    assert_eq!(
        evaluate(Guard::CustomerPage, regular(false), "/customers"),
        Decision::Render
    );
}

#[test]
fn authenticated_guard_reroutes_admins_off_the_regular_dashboard() {
    assert_eq!(
        evaluate(Guard::Authenticated, ADMIN, paths::DASHBOARD),
        Decision::Redirect(paths::ADMIN)
    );
    assert_eq!(evaluate(Guard::Authenticated, ADMIN, "/accounts"), Decision::Render);
    assert_eq!(
        evaluate(Guard::Authenticated, regular(true), paths::DASHBOARD),
        Decision::Render
    );
}

#[test]
fn logout_makes_every_protected_path_redirect_to_login() {
    // After a cleared session the flags collapse to the default.
    let flags = SessionFlags::default();
    for (guard, path) in [
        (Guard::Admin, "/admin"),
        (Guard::CustomerPage, "/customers"),
        (Guard::Authenticated, "/dashboard"),
        (Guard::Authenticated, "/transactions"),
    ] {
        assert_eq!(evaluate(guard, flags, path), Decision::Redirect(paths::LOGIN));
    }
}
