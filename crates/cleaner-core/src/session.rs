//! In-memory bearer credential shared by the shell and the API client.
//!
//! The token never leaves process memory. Every login and logout bumps the
//! epoch so work started under an older session can be recognized and dropped.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    authenticated: bool,
    epoch: u64,
}

#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicked writer must not leave a credential behind, so poisoning is
    // recovered rather than treated as an empty session.
    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the stored token without marking the session authenticated.
    pub fn set_token(&self, token: &str) {
        self.write().token = Some(token.to_string());
    }

    pub fn clear_token(&self) {
        self.write().token = None;
    }

    pub fn login(&self, token: &str) {
        let mut state = self.write();
        state.token = Some(token.to_string());
        state.authenticated = true;
        state.epoch += 1;
    }

    /// Token and flag are dropped under one lock, so no request built after
    /// this returns can carry the old credential.
    pub fn logout(&self) {
        let mut state = self.write();
        state.token = None;
        state.authenticated = false;
        state.epoch += 1;
    }

    pub fn bearer(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn has_token(&self) -> bool {
        self.read().token.is_some()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().authenticated
    }

    pub fn epoch(&self) -> u64 {
        self.read().epoch
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.has_token())
            .field("authenticated", &self.is_authenticated())
            .field("epoch", &self.epoch())
            .finish()
    }
}
