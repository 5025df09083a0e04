//! Role-dependent dashboard payloads.
//!
//! `GET /api/v1/dashboard` returns one of two untagged shapes depending on
//! the server's view of the caller. The shape is resolved exactly once, in
//! [`DashboardData::from_value`], into a closed enum; everything downstream
//! matches on the variant.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use serde::{Deserialize, Serialize};

use super::envelope::PaginationMeta;
use super::error::{ApiError, ContractViolation};
use super::types::Role;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberWithOverdue {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub overdue_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarianDashboard {
    pub total_books: u32,
    pub total_borrowed_books: u32,
    pub books_due_today: u32,
    pub members_with_overdue: Vec<MemberWithOverdue>,
    #[serde(default)]
    pub pagination: PaginationMeta,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: u64,
    pub title: String,
    pub author: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowedBook {
    pub id: u64,
    pub book: BookSummary,
    pub borrowed_at: String,
    pub due_date: String,
    pub days_until_due: i64,
    pub is_overdue: bool,
    #[serde(default)]
    pub days_overdue: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueBook {
    pub id: u64,
    pub book: BookSummary,
    pub borrowed_at: String,
    pub due_date: String,
    pub days_overdue: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub total_borrowed: u32,
    pub total_overdue: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDashboard {
    pub borrowed_books: Vec<BorrowedBook>,
    #[serde(default)]
    pub overdue_books: Vec<OverdueBook>,
    pub summary: MemberSummary,
    #[serde(default)]
    pub pagination: PaginationMeta,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardData {
    Librarian(LibrarianDashboard),
    Member(MemberDashboard),
}

impl DashboardData {
    /// Classify and decode the object under the response's `data` key.
    ///
    /// Librarian: `total_books` and `members_with_overdue` present.
    /// Member: `borrowed_books` and `summary` present, `total_books` absent.
    ///
    /// # Errors
    ///
    /// Returns a `ContractViolation` when the payload matches neither or both
    /// shapes, and `ApiError::Decode` when the matched shape is malformed.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ApiError> {
        let Some(fields) = value.as_object() else {
            return Err(ContractViolation::UnknownDashboardShape.into());
        };
        let librarian = fields.contains_key("total_books") && fields.contains_key("members_with_overdue");
        let member = fields.contains_key("borrowed_books") && fields.contains_key("summary");
        let decode = |e: serde_json::Error| ApiError::Decode(e.to_string());
        match (librarian, member) {
            (true, false) => serde_json::from_value(value).map(Self::Librarian).map_err(decode),
            (false, true) => serde_json::from_value(value).map(Self::Member).map_err(decode),
            (true, true) => Err(ContractViolation::AmbiguousDashboardShape.into()),
            (false, false) => Err(ContractViolation::UnknownDashboardShape.into()),
        }
    }

    /// Role whose dashboard this payload is.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Librarian(_) => Role::Librarian,
            Self::Member(_) => Role::Member,
        }
    }

    #[must_use]
    pub fn pagination(&self) -> PaginationMeta {
        match self {
            Self::Librarian(data) => data.pagination,
            Self::Member(data) => data.pagination,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardResponse {
    pub data: serde_json::Value,
}
