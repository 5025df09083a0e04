//! Lifecycle of a single view-scoped remote query.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use crate::net::error::ApiError;

/// What a list or detail view currently knows about its query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Inline message for the failed state. Contract violations collapse to
    /// the generic unexpected-data text.
    #[must_use]
    pub fn error_message(&self, fallback: &str) -> Option<String> {
        self.error().map(|err| err.user_message(fallback))
    }
}
