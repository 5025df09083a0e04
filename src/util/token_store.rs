//! Bearer credential persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP gateway reads the credential before every request and overwrites
//! it whenever a response rotates it. `Session::logout` is the only caller of
//! `clear`.
//!
//! DESIGN
//! ======
//! `LocalTokenStore` is stateless: every call goes straight to
//! `localStorage`, so two instances in the same page always agree. Native
//! builds (tests, tooling) use a per-thread map with the same visibility rule.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::TOKEN_STORAGE_KEY;

/// Durable home of the bearer credential.
pub trait TokenStore: Send + Sync {
    /// Current credential, or `None` when absent or blank.
    fn get(&self) -> Option<String>;
    /// Overwrite the credential.
    fn set(&self, token: &str);
    /// Remove the credential.
    fn clear(&self);
}

/// Browser `localStorage`-backed store keyed by [`TOKEN_STORAGE_KEY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalTokenStore {
    key: &'static str,
}

impl Default for LocalTokenStore {
    fn default() -> Self {
        Self { key: TOKEN_STORAGE_KEY }
    }
}

impl LocalTokenStore {
    #[must_use]
    pub fn with_key(key: &'static str) -> Self {
        Self { key }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(not(feature = "csr"))]
thread_local! {
    static FALLBACK: std::cell::RefCell<std::collections::HashMap<&'static str, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        let raw = local_storage()?.get_item(self.key).ok().flatten();
        #[cfg(not(feature = "csr"))]
        let raw = FALLBACK.with(|map| map.borrow().get(self.key).cloned());
        raw.filter(|token| !token.trim().is_empty())
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; credential not persisted");
                return;
            };
            let _ = storage.set_item(self.key, token);
        }
        #[cfg(not(feature = "csr"))]
        FALLBACK.with(|map| {
            map.borrow_mut().insert(self.key, token.to_owned());
        });
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(self.key);
            }
        }
        #[cfg(not(feature = "csr"))]
        FALLBACK.with(|map| {
            map.borrow_mut().remove(self.key);
        });
    }
}

/// In-process store shared between clones. Used where no browser storage exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|token| !token.trim().is_empty())
    }

    fn set(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
