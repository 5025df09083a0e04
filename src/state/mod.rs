//! Reactive client state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the single owner of identity and the stored credential.
//! `fetch` models the lifecycle of one view's remote query.

pub mod fetch;
pub mod session;
