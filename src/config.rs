//! Client configuration baked in at build time.
//!
//! Values come from `option_env!` so the WASM bundle carries them without a
//! runtime config fetch. Every knob has a typed default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::fetch::RetryPolicy;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_FETCH_RETRIES: u32 = 1;

/// `localStorage` key holding the bearer credential. The only persisted client state.
pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// Page size the backend assumes when a list response carries no pagination metadata.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Page size requested by the book, borrowing and invitation list views.
pub const LIST_PER_PAGE: u32 = 12;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_owned(),
            retry: RetryPolicy { retries: DEFAULT_FETCH_RETRIES },
        }
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `LIBRARY_API_URL`: API origin, default `http://localhost:3000`
    /// - `LIBRARY_FETCH_RETRIES`: extra attempts for read queries, default 1
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("LIBRARY_API_URL"), option_env!("LIBRARY_FETCH_RETRIES"))
    }

    fn from_raw(api_url: Option<&str>, retries: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_owned();
        let retries = retries
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_FETCH_RETRIES);
        Self { api_base_url, retry: RetryPolicy { retries } }
    }
}
