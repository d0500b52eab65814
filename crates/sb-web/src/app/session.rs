//! The session store: the only place that touches the session storage keys.
//!
//! The flags live in browser storage under the keys the rest of the app
//! (guards, navigation) reads through [`SessionStore::load`]. Writes go
//! through a single `set`/`clear` pair so a login either lands completely or
//! not at all; nothing else writes these keys.

use sb_types::session::{Session, SessionUser};

use crate::app::storage::BrowserStorage;

pub const KEY_AUTHENTICATED: &str = "isAuthenticated";
pub const KEY_ADMIN: &str = "isAdmin";
pub const KEY_CUSTOMER_RECORD: &str = "hasCustomerRecord";
pub const KEY_USER: &str = "user";

const ALL_KEYS: [&str; 4] = [KEY_AUTHENTICATED, KEY_ADMIN, KEY_CUSTOMER_RECORD, KEY_USER];

/// Tab-scoped session flag store.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore {
    storage: BrowserStorage,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            storage: BrowserStorage::new(),
        }
    }

    /// Read the current session, tolerating partial or stale key sets.
    pub fn load(&self) -> Option<Session> {
        decode(|key| self.storage.get(key))
    }

    /// Write every session key in one synchronous batch. Callers must do
    /// this before navigating so no guard observes a half-written session.
    pub fn set(&self, session: &Session) {
        for (key, value) in encode(session) {
            if let Err(err) = self.storage.set(key, &value) {
                tracing::warn!(key, error = %err, "failed to persist session flag");
            }
        }
    }

    /// Clear every session key. Partial clears were a defect class in the
    /// ancestry of this code; always remove the full set.
    pub fn clear(&self) {
        for key in ALL_KEYS {
            if let Err(err) = self.storage.remove(key) {
                tracing::warn!(key, error = %err, "failed to clear session flag");
            }
        }
    }
}

/// Map a session onto the storage key set.
pub fn encode(session: &Session) -> Vec<(&'static str, String)> {
    let user_json = serde_json::to_string(session.user()).unwrap_or_default();
    vec![
        (KEY_AUTHENTICATED, "true".to_string()),
        (KEY_ADMIN, session.is_admin().to_string()),
        (
            KEY_CUSTOMER_RECORD,
            session.has_customer_record().to_string(),
        ),
        (KEY_USER, user_json),
    ]
}

/// Rebuild a session from stored keys.
///
/// Anything short of a coherent key set decodes to `None` (signed out): a
/// missing or unparsable `user` value means the flags cannot be trusted. A
/// stray `hasCustomerRecord` alongside `isAdmin=true` is ignored because the
/// admin variant has no record flag.
pub fn decode(get: impl Fn(&str) -> Option<String>) -> Option<Session> {
    if get(KEY_AUTHENTICATED).as_deref() != Some("true") {
        return None;
    }
    let user: SessionUser = serde_json::from_str(&get(KEY_USER)?).ok()?;

    if get(KEY_ADMIN).as_deref() == Some("true") {
        Some(Session::admin(user))
    } else {
        let has_record = get(KEY_CUSTOMER_RECORD).as_deref() == Some("true");
        Some(Session::regular(user, has_record))
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
