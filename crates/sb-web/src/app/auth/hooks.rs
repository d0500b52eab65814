use dioxus::prelude::*;
use sb_types::session::Session;

use super::context::AuthState;
use crate::app::session::SessionStore;

/// Get current auth state from context.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Persist a freshly resolved session and publish it to the app.
///
/// The store write happens before the signal update (and therefore before
/// any navigation a caller performs), so no guard can observe flags that
/// storage does not yet hold.
pub fn sign_in(mut auth: Signal<AuthState>, session: Session) {
    SessionStore::new().set(&session);
    auth.set(AuthState {
        session: Some(session),
    });
}

/// Clear every session flag and publish the signed-out state.
pub fn sign_out(mut auth: Signal<AuthState>) {
    SessionStore::new().clear();
    auth.set(AuthState { session: None });
}

/// Re-read the session from storage, used by the cross-tab storage listener.
pub fn refresh_from_storage(mut auth: Signal<AuthState>) {
    let session = SessionStore::new().load();
    if auth.peek().session != session {
        auth.set(AuthState { session });
    }
}
