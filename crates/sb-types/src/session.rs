use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;

/// Role string stored for the distinguished admin account.
pub const ROLE_ADMIN: &str = "admin";
/// Role string stored for backend-authenticated users.
pub const ROLE_USER: &str = "user";

/// Display identity carried in the session. Not used for authorization
/// decisions; those read the session variant itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub role: String,
}

impl From<AuthUser> for SessionUser {
    fn from(user: AuthUser) -> Self {
        Self {
            email: user.email,
            full_name: user.full_name,
            role: ROLE_USER.to_string(),
        }
    }
}

/// The authenticated session for this browser tab.
///
/// A sum type rather than loose flags so illegal combinations (an admin with
/// a customer-record flag, a record flag without authentication) cannot be
/// represented. "No session" is `Option<Session>::None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    /// The distinguished admin account.
    Admin { user: SessionUser },
    /// A backend-authenticated user. `has_customer_record` is populated once
    /// per login by the customer-record probe and never re-queried until the
    /// next login.
    Regular {
        user: SessionUser,
        has_customer_record: bool,
    },
}

impl Session {
    pub fn admin(user: SessionUser) -> Self {
        Session::Admin { user }
    }

    pub fn regular(user: SessionUser, has_customer_record: bool) -> Self {
        Session::Regular {
            user,
            has_customer_record,
        }
    }

    pub fn user(&self) -> &SessionUser {
        match self {
            Session::Admin { user } => user,
            Session::Regular { user, .. } => user,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Session::Admin { .. })
    }

    /// Whether the user already owns a customer profile. Always false for
    /// admin sessions; admins bypass the record gate instead.
    pub fn has_customer_record(&self) -> bool {
        match self {
            Session::Admin { .. } => false,
            Session::Regular {
                has_customer_record,
                ..
            } => *has_customer_record,
        }
    }

    /// The customers page is reachable for admins and for regular users who
    /// have not yet onboarded a customer profile.
    pub fn can_view_customers(&self) -> bool {
        self.is_admin() || !self.has_customer_record()
    }

    pub fn flags(&self) -> SessionFlags {
        SessionFlags {
            is_authenticated: true,
            is_admin: self.is_admin(),
            has_customer_record: self.has_customer_record(),
        }
    }
}

/// Flag view of the session consumed by route guards and navigation
/// filtering. Derived on demand, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionFlags {
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub has_customer_record: bool,
}

impl SessionFlags {
    /// Flags for the current session state; `None` yields the signed-out
    /// default where every flag is false.
    pub fn of(session: Option<&Session>) -> Self {
        session.map(Session::flags).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
