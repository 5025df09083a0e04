use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;
use leptos::prelude::Owner;
use serde_json::json;

use super::*;
use crate::config::LOGIN_PATH;
use crate::net::api::ApiClient;
use crate::net::gateway::Gateway;
use crate::net::test_support::MockTransport;
use crate::net::types::BookFilters;
use crate::util::guard::{GuardDecision, evaluate};
use crate::util::token_store::MemoryTokenStore;
use crate::util::unauthorized::UnauthorizedHub;

fn user(role: Role) -> User {
    User {
        id: "1".to_owned(),
        email: "test@example.com".to_owned(),
        name: "Test User".to_owned(),
        role,
    }
}

fn with_session<F: FnOnce(Session, MemoryTokenStore)>(token: Option<&str>, body: F) {
    let owner = Owner::new();
    owner.with(|| {
        let tokens = token.map_or_else(MemoryTokenStore::default, MemoryTokenStore::with_token);
        let session = Session::new(Arc::new(tokens.clone()));
        body(session, tokens);
    });
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_state_is_anonymous() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.user(), None);
    assert_eq!(state.role(), None);
}

// =============================================================
// set_user
// =============================================================

#[test]
fn authenticated_tracks_user_across_updates() {
    with_session(None, |session, _| {
        let sequence = [Some(user(Role::Member)), None, Some(user(Role::Librarian)), Some(user(Role::Member)), None];
        for next in sequence {
            let expected = next.is_some();
            session.set_user(next);
            assert_eq!(session.get_untracked().is_authenticated(), expected);
        }
    });
}

#[test]
fn set_user_replaces_identity_wholesale() {
    with_session(None, |session, _| {
        session.set_user(Some(user(Role::Member)));
        session.set_user(Some(user(Role::Librarian)));
        assert_eq!(session.get_untracked().role(), Some(Role::Librarian));
    });
}

#[test]
fn set_user_none_keeps_stored_credential() {
    with_session(Some("abc"), |session, tokens| {
        session.set_user(None);
        assert_eq!(tokens.get(), Some("abc".to_owned()));
    });
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_user_and_credential() {
    with_session(Some("abc"), |session, tokens| {
        session.set_user(Some(user(Role::Librarian)));
        session.logout();

        let state = session.get_untracked();
        assert!(!state.is_authenticated());
        assert_eq!(state.user(), None);
        assert_eq!(tokens.get(), None);
    });
}

#[test]
fn logout_from_anonymous_state_is_harmless() {
    with_session(None, |session, tokens| {
        session.logout();
        assert!(!session.get_untracked().is_authenticated());
        assert_eq!(tokens.get(), None);
    });
}

#[test]
fn unauthorized_signal_logs_out() {
    with_session(Some("stale"), |session, tokens| {
        session.set_user(Some(user(Role::Member)));
        session.on_unauthorized();
        assert!(!session.get_untracked().is_authenticated());
        assert_eq!(tokens.get(), None);
    });
}

// =============================================================
// Unauthorized response end to end
// =============================================================

#[test]
fn rejected_request_signs_out_and_guards_redirect_to_login() {
    with_session(Some("stale"), |session, tokens| {
        session.set_user(Some(user(Role::Librarian)));

        let transport = MockTransport::default();
        transport.respond_json(401, json!({"errors": [{"status": "401", "detail": "Unauthorized"}]}));

        let signals = Arc::new(AtomicUsize::new(0));
        let hub = UnauthorizedHub::new();
        let counter = signals.clone();
        hub.register(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            session.on_unauthorized();
        });

        let gateway = Gateway::new(Arc::new(transport.clone()), Arc::new(tokens.clone()), Arc::new(hub));
        let api = ApiClient::new(gateway);

        let err = block_on(api.list_books(&BookFilters::default())).unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(signals.load(Ordering::SeqCst), 1);
        assert_eq!(tokens.get(), None);
        assert!(!session.get_untracked().is_authenticated());
        assert_eq!(evaluate(&session.get_untracked()), GuardDecision::Redirect(LOGIN_PATH));
        assert_eq!(transport.last_request().header("authorization"), Some("Bearer stale"));
    });
}
