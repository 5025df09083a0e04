//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage, credential signalling, and
//! fetch coordination from page and component logic, and hold the pure
//! decision functions (guard, capabilities, form checks) views call into.

pub mod capabilities;
pub mod fetch;
pub mod format;
pub mod guard;
pub mod token_store;
pub mod unauthorized;
pub mod validation;
