//! Navigation presenter: which sidebar items are visible for the current
//! session, derived fresh from the flags on every render.

use sb_types::session::SessionFlags;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const DASHBOARD: NavItem = NavItem {
    label: "Dashboard",
    path: "/dashboard",
};
pub const CUSTOMERS: NavItem = NavItem {
    label: "Customers",
    path: "/customers",
};
pub const ACCOUNTS: NavItem = NavItem {
    label: "Accounts",
    path: "/accounts",
};
pub const TRANSACTIONS: NavItem = NavItem {
    label: "Transactions",
    path: "/transactions",
};

/// Ordered sidebar items for an authenticated session.
///
/// Customers is the only conditional entry: admins always see it, regular
/// users only while they have no customer record.
pub fn visible_items(flags: SessionFlags) -> Vec<NavItem> {
    let mut items = vec![DASHBOARD];
    if flags.is_admin || !flags.has_customer_record {
        items.push(CUSTOMERS);
    }
    items.push(ACCOUNTS);
    items.push(TRANSACTIONS);
    items
}

/// Active highlighting uses exact path match only; no prefix matching.
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.path == current_path
}

#[cfg(test)]
#[path = "nav_tests.rs"]
mod tests;
