//! Error taxonomy for every call that crosses the HTTP gateway.
//!
//! ERROR HANDLING
//! ==============
//! - `Network`: no response arrived. Never retried by the gateway.
//! - `Http`: the server answered with a non-2xx status. A 401 has already
//!   been routed to the unauthorized handler by the time the caller sees it.
//! - `Decode`: a response arrived but its body is not the expected wire shape.
//! - `Contract`: the body parsed but breaks a structural promise (cardinality,
//!   dashboard shape). Views render these as "unexpected data", never inline.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::{Deserialize, Serialize};

use super::types::{Role, deserialize_string_or_empty};

/// One `{status, detail}` entry of an `{errors: [...]}` response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    pub detail: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

/// Structural promises a response body can break.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("expected a single record, received a collection")]
    ExpectedSingleRecord,
    #[error("dashboard payload matches no known shape")]
    UnknownDashboardShape,
    #[error("dashboard payload matches both librarian and member shapes")]
    AmbiguousDashboardShape,
    #[error("{found} dashboard data returned for a {expected} session")]
    DashboardRoleMismatch { expected: Role, found: Role },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Http { status: u16, errors: Vec<ErrorDetail> },

    /// The response body could not be parsed.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The response parsed but violates the wire contract.
    #[error("unexpected data: {0}")]
    Contract(#[from] ContractViolation),
}

impl ApiError {
    /// Build an `Http` error from a status and a possibly empty or non-JSON body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let errors = serde_json::from_str::<ErrorBody>(body).map(|b| b.errors).unwrap_or_default();
        Self::Http { status, errors }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Contract(_))
    }

    /// Whether a read query may be attempted again. Only transient failures qualify.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { status: 500..=599, .. })
    }

    /// First server-supplied `detail`, if the body carried any.
    #[must_use]
    pub fn first_detail(&self) -> Option<&str> {
        match self {
            Self::Http { errors, .. } => errors.iter().map(|e| e.detail.as_str()).find(|d| !d.is_empty()),
            _ => None,
        }
    }

    /// Message suitable for an inline form error.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Contract(_) | Self::Decode(_) => "Received unexpected data from the server.".to_owned(),
            _ => self.first_detail().unwrap_or(fallback).to_owned(),
        }
    }
}
