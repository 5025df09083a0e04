//! Domain DTOs for the library REST API.
//!
//! DESIGN
//! ======
//! Record types carry their `id` alongside the attributes: the envelope
//! layer merges the resource identifier into the attribute object before
//! deserializing, so these structs describe the flat shape views consume.
//! Filter and payload types own their query/body encoding so each endpoint
//! documents exactly which optional fields it may omit.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Query parameters for a GET, in insertion order.
pub type QueryParams = Vec<(&'static str, String)>;

// =============================================================================
// USERS
// =============================================================================

/// Capability tier of an account. Decides both response shapes and UI actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Librarian,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Librarian => "librarian",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated account as returned by login and signup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl User {
    /// Uppercased first letter of the display name, for avatar badges.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupCredentials {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub name: String,
}

// =============================================================================
// BOOKS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
    pub total_copies: u32,
    pub available_copies: u32,
    /// Present on member-scoped responses.
    #[serde(default)]
    pub borrowed_by_current_user: Option<bool>,
}

impl Book {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

/// `GET /api/v1/books` filters. Unset or blank fields are omitted from the query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookFilters {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl BookFilters {
    #[must_use]
    pub fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_text(&mut params, "title", self.title.as_deref());
        push_text(&mut params, "author", self.author.as_deref());
        push_text(&mut params, "genre", self.genre.as_deref());
        push_number(&mut params, "page", self.page);
        push_number(&mut params, "per_page", self.per_page);
        params
    }

    #[must_use]
    pub fn has_search_terms(&self) -> bool {
        [&self.title, &self.author, &self.genre]
            .iter()
            .any(|f| f.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

/// `POST /api/v1/books` body, sent as `{book: {...}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateBookInput {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
    pub total_copies: u32,
}

/// `PATCH /api/v1/books/:id` body. Only set fields are transmitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateBookInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_copies: Option<u32>,
}

// =============================================================================
// BORROWINGS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorrowingStatus {
    Active,
    Returned,
    Overdue,
}

impl BorrowingStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Returned, Self::Overdue];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Returned => "returned",
            Self::Overdue => "overdue",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrowing {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub book_id: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub user_id: String,
    pub book_title: String,
    pub borrowed_at: String,
    pub due_date: String,
    #[serde(default)]
    pub returned_at: Option<String>,
    pub status: BorrowingStatus,
    #[serde(default)]
    pub days_overdue: u32,
}

impl Borrowing {
    /// A borrowing can be returned until the server marks it returned.
    #[must_use]
    pub fn is_returnable(&self) -> bool {
        self.status != BorrowingStatus::Returned
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BorrowingFilters {
    pub status: Option<BorrowingStatus>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl BorrowingFilters {
    #[must_use]
    pub fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_text(&mut params, "status", self.status.map(BorrowingStatus::as_str));
        push_number(&mut params, "page", self.page);
        push_number(&mut params, "per_page", self.per_page);
        params
    }
}

// =============================================================================
// INVITATIONS
// =============================================================================

/// Server-driven invitation lifecycle: `pending -> accepted | expired`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Expired,
}

impl InvitationStatus {
    /// Terminal states. Accept attempts are still sent; the server rejects them.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Expired => "expired",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    pub email: String,
    pub role: String,
    pub expires_at: String,
    #[serde(default)]
    pub accepted_at: Option<String>,
    pub status: InvitationStatus,
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    pub invited_by_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvitationFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl InvitationFilters {
    #[must_use]
    pub fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_number(&mut params, "page", self.page);
        push_number(&mut params, "per_page", self.per_page);
        params
    }
}

/// `PATCH /api/v1/invitations/token/:token/accept` body, sent as `{user: {...}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AcceptInvitationInput {
    pub name: String,
    pub password: String,
    pub password_confirmation: String,
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl DashboardFilters {
    #[must_use]
    pub fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_number(&mut params, "page", self.page);
        push_number(&mut params, "per_page", self.per_page);
        params
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn push_text(params: &mut QueryParams, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        params.push((key, value.to_owned()));
    }
}

fn push_number(params: &mut QueryParams, key: &'static str, value: Option<u32>) {
    if let Some(value) = value {
        params.push((key, value.to_string()));
    }
}

/// Accept identifiers and status codes sent either as JSON strings or numbers.
pub(crate) fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}

/// Like [`deserialize_string_from_scalar`], with `null` read as `""`.
pub(crate) fn deserialize_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_opt_string_from_scalar(deserializer).map(Option::unwrap_or_default)
}

pub(crate) fn deserialize_opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}
