//! The single choke point for outbound API requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resource clients build an [`HttpRequest`] and hand it to [`Gateway::send`].
//! The gateway attaches the stored bearer credential, captures rotated
//! credentials from responses, and reports 401s to the unauthorized handler.
//! The actual wire I/O sits behind [`Transport`] so the interceptor logic runs
//! unchanged in the browser and under native tests.
//!
//! TRADE-OFFS
//! ==========
//! Every call awaits the transport, so the token read here and the token a
//! concurrent response writes may interleave; the last writer wins. There is
//! no request timeout beyond whatever the browser's fetch enforces.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use futures::future::LocalBoxFuture;

use super::error::ApiError;
use super::types::QueryParams;
use crate::util::token_store::TokenStore;
use crate::util::unauthorized::UnauthorizedHandler;

pub const AUTHORIZATION: &str = "Authorization";
const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A request relative to the API origin.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The parts of a response the client layer looks at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Raw `Authorization` response header, if the server sent one.
    pub authorization: Option<String>,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Wire I/O. Returns `Err` only when no response was received.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, ApiError>>;
}

/// Format a stored credential for the `Authorization` request header.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("{BEARER_PREFIX}{token}")
}

/// Extract the raw credential from an `Authorization` response header.
/// Returns `None` when nothing usable remains after stripping.
#[must_use]
pub fn credential_from_header(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let token = match raw.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => &raw[BEARER_PREFIX.len()..],
        _ => raw,
    };
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
    unauthorized: Arc<dyn UnauthorizedHandler>,
}

impl Gateway {
    pub fn new(
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenStore>,
        unauthorized: Arc<dyn UnauthorizedHandler>,
    ) -> Self {
        Self { transport, tokens, unauthorized }
    }

    /// Send `request` through the interceptors.
    ///
    /// # Errors
    ///
    /// - `ApiError::Network` when the transport produced no response.
    /// - `ApiError::Http` for any non-2xx status. A 401 additionally fires the
    ///   unauthorized handler exactly once before the error is returned.
    pub async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        if let Some(token) = self.tokens.get() {
            request.headers.push((AUTHORIZATION, bearer_header(&token)));
        }
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await.inspect_err(|e| {
            log::warn!("{} {path} failed without response: {e}", method.as_str());
        })?;

        if response.status == 401 {
            log::debug!("{} {path} -> 401; signalling unauthorized", method.as_str());
            self.unauthorized.on_unauthorized();
            return Err(ApiError::from_response(response.status, &response.body));
        }

        if let Some(token) = response.authorization.as_deref().and_then(credential_from_header) {
            self.tokens.set(token);
        }

        if !response.is_success() {
            log::debug!("{} {path} -> {}", method.as_str(), response.status);
            return Err(ApiError::from_response(response.status, &response.body));
        }
        Ok(response)
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway").finish_non_exhaustive()
    }
}
