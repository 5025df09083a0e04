//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard, the header, and every role-conditional view.
//! Written by the login/signup flows, the logout action, and the
//! unauthorized signal raised by the gateway.
//!
//! DESIGN
//! ======
//! `SessionState` keeps `user` private so "authenticated" can only ever be
//! derived from it. [`Session`] funnels every mutation through `set_user`
//! and `logout`; readers subscribe through the signal. `logout` is the only
//! path on the client that clears the stored credential.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::{Role, User};
use crate::util::token_store::TokenStore;
use crate::util::unauthorized::UnauthorizedHandler;

/// Snapshot of who is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    user: Option<User>,
}

impl SessionState {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Process-wide session store. `Copy`, so views capture it freely.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
    tokens: StoredValue<Arc<dyn TokenStore>>,
}

impl Session {
    /// Create an anonymous session backed by `tokens`.
    ///
    /// A credential left in the store by a previous page load is kept; the
    /// first request that carries it decides whether it is still valid.
    #[must_use]
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { state: RwSignal::new(SessionState::default()), tokens: StoredValue::new(tokens) }
    }

    /// Tracked read; subscribes the calling effect or view.
    #[must_use]
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    #[must_use]
    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Replace the identity wholesale. `None` signs out without touching
    /// the stored credential.
    pub fn set_user(&self, user: Option<User>) {
        self.state.set(SessionState { user });
    }

    /// Clear the credential and the identity.
    pub fn logout(&self) {
        self.tokens.with_value(|tokens| tokens.clear());
        self.state.set(SessionState::default());
        log::debug!("session: signed out");
    }

    /// Tracked.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Tracked.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// Tracked.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.state.with(SessionState::role)
    }
}

impl UnauthorizedHandler for Session {
    fn on_unauthorized(&self) {
        log::warn!("session: credential rejected by server");
        self.logout();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("state", &self.state.get_untracked()).finish_non_exhaustive()
    }
}
