//! Route guarding as a pure decision function.
//!
//! Guards are evaluated on every navigation from the current session flags;
//! nothing here is cached and nothing touches the network. The routing layer
//! turns a [`Decision::Redirect`] into a navigator push.

use sb_types::session::SessionFlags;

/// Guard targets used in redirects.
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const ADMIN: &str = "/admin";
}

/// Which policy protects a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Admin-only pages (`/admin`).
    Admin,
    /// The customer onboarding page (`/customers`): admins always, regular
    /// users only while they have no customer record.
    CustomerPage,
    /// Any other authenticated page.
    Authenticated,
}

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Render,
    Redirect(&'static str),
}

/// Evaluate `guard` for a navigation to `path` under the given flags.
pub fn evaluate(guard: Guard, flags: SessionFlags, path: &str) -> Decision {
    if !flags.is_authenticated {
        return Decision::Redirect(paths::LOGIN);
    }

    match guard {
        Guard::Admin => {
            if flags.is_admin {
                Decision::Render
            } else {
                Decision::Redirect(paths::DASHBOARD)
            }
        }
        Guard::CustomerPage => {
            // Admins bypass the record check entirely. For regular users the
            // gate is one-way: once the record flag is set it holds until
            // logout, with no re-check against the backend.
            if flags.is_admin || !flags.has_customer_record {
                Decision::Render
            } else {
                Decision::Redirect(paths::DASHBOARD)
            }
        }
        Guard::Authenticated => {
            // Admins land on their own dashboard.
            if flags.is_admin && path == paths::DASHBOARD {
                Decision::Redirect(paths::ADMIN)
            } else {
                Decision::Render
            }
        }
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
