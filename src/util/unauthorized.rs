//! Authentication-failure notification seam between transport and session.
//!
//! DESIGN
//! ======
//! The gateway depends only on [`UnauthorizedHandler`]. The app builds an
//! [`UnauthorizedHub`] at bootstrap, hands it to the gateway, then registers
//! session teardown on it once the session exists. The transport layer never
//! imports session or routing code.

#[cfg(test)]
#[path = "unauthorized_test.rs"]
mod unauthorized_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Receiver of "the server rejected our credential" signals.
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self);
}

type Callback = Arc<dyn Fn() + Send + Sync>;

/// Single-slot callback registry. Registering replaces the previous observer.
#[derive(Clone, Default)]
pub struct UnauthorizedHub {
    slot: Arc<Mutex<Option<Callback>>>,
}

impl UnauthorizedHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `callback`, dropping whatever was registered before.
    pub fn register<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(callback));
    }

    /// Invoke the registered callback, if any.
    pub fn notify(&self) {
        // Clone out so the callback may re-register without deadlocking.
        let callback = self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone();
        match callback {
            Some(callback) => callback(),
            None => log::debug!("unauthorized signal with no registered handler"),
        }
    }

    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

impl UnauthorizedHandler for UnauthorizedHub {
    fn on_unauthorized(&self) {
        self.notify();
    }
}

impl std::fmt::Debug for UnauthorizedHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnauthorizedHub").field("registered", &self.is_registered()).finish()
    }
}
