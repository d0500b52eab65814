use dioxus::prelude::*;
use sb_types::session::{Session, SessionFlags};

use crate::app::session::SessionStore;

/// Authentication state shared through context.
///
/// Seeded synchronously from the session store on mount, so there is no
/// loading phase: either the storage keys decode to a session or they don't.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn flags(&self) -> SessionFlags {
        SessionFlags::of(self.session.as_ref())
    }
}

/// Initialize the auth provider from the session store.
pub fn use_auth_provider() -> Signal<AuthState> {
    use_context_provider(|| {
        Signal::new(AuthState {
            session: SessionStore::new().load(),
        })
    })
}
