//! Route-guard decision for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::protected_route` re-runs [`evaluate`] inside an effect, so a
//! session torn down by a background 401 redirects without any navigation
//! from the user. The attempted path is not remembered.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::{DASHBOARD_PATH, LOGIN_PATH};
use crate::state::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Protected views render only for an authenticated session.
#[must_use]
pub fn evaluate(state: &SessionState) -> GuardDecision {
    if state.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Login and signup bounce an already-authenticated user to the dashboard.
#[must_use]
pub fn evaluate_public(state: &SessionState) -> GuardDecision {
    if state.is_authenticated() {
        GuardDecision::Redirect(DASHBOARD_PATH)
    } else {
        GuardDecision::Render
    }
}
