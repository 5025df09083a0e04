//! Typed resource clients for the library REST API.
//!
//! Every operation builds its request here, sends it through the
//! [`Gateway`], and normalizes the envelope. Errors are never swallowed;
//! callers decide between retry and inline display.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::dashboard::{DashboardData, DashboardResponse};
use super::envelope::{Document, Page};
use super::error::ApiError;
use super::gateway::{Gateway, HttpRequest};
use super::types::{
    AcceptInvitationInput, Book, BookFilters, Borrowing, BorrowingFilters, CreateBookInput, DashboardFilters,
    Invitation, InvitationFilters, LoginCredentials, SignupCredentials, UpdateBookInput, User,
};

const API_PREFIX: &str = "/api/v1";

fn endpoint(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

fn book_endpoint(id: &str) -> String {
    endpoint(&format!("/books/{id}"))
}

fn borrowing_return_endpoint(id: &str) -> String {
    endpoint(&format!("/borrowings/{id}/return"))
}

fn invitation_endpoint(id: &str) -> String {
    endpoint(&format!("/invitations/{id}"))
}

fn invitation_token_endpoint(token: &str) -> String {
    endpoint(&format!("/invitations/token/{token}"))
}

fn invitation_accept_endpoint(token: &str) -> String {
    endpoint(&format!("/invitations/token/{token}/accept"))
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    gateway: Gateway,
}

impl ApiClient {
    #[must_use]
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    async fn fetch_one<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let response = self.gateway.send(request).await?;
        Document::parse(&response.body)?.into_one()
    }

    async fn fetch_page<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<Page<T>, ApiError> {
        let response = self.gateway.send(request).await?;
        Document::parse(&response.body)?.into_page()
    }

    async fn send_empty(&self, request: HttpRequest) -> Result<(), ApiError> {
        self.gateway.send(request).await.map(|_| ())
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /api/v1/login`. The gateway stores the returned credential.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` with status 401 for rejected credentials.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<User, ApiError> {
        let request = HttpRequest::post(endpoint("/login")).with_json(serde_json::json!({ "user": credentials }));
        self.fetch_one(request).await
    }

    /// `POST /api/v1/signup`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` with status 422 and field details on validation failure.
    pub async fn signup(&self, credentials: &SignupCredentials) -> Result<User, ApiError> {
        let request = HttpRequest::post(endpoint("/signup")).with_json(serde_json::json!({ "user": credentials }));
        self.fetch_one(request).await
    }

    /// `DELETE /api/v1/logout`. Does not touch local session state.
    ///
    /// # Errors
    ///
    /// Propagates transport and HTTP failures.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_empty(HttpRequest::delete(endpoint("/logout"))).await
    }

    // =========================================================================
    // BOOKS
    // =========================================================================

    /// `GET /api/v1/books`.
    ///
    /// # Errors
    ///
    /// Propagates transport, HTTP, and decode failures.
    pub async fn list_books(&self, filters: &BookFilters) -> Result<Page<Book>, ApiError> {
        self.fetch_page(HttpRequest::get(endpoint("/books")).with_query(filters.query())).await
    }

    /// `GET /api/v1/books/:id`.
    ///
    /// # Errors
    ///
    /// Returns a contract violation if the server answers with a collection.
    pub async fn get_book(&self, id: &str) -> Result<Book, ApiError> {
        self.fetch_one(HttpRequest::get(book_endpoint(id))).await
    }

    /// `POST /api/v1/books`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` with status 422 on validation failure.
    pub async fn create_book(&self, input: &CreateBookInput) -> Result<Book, ApiError> {
        let request = HttpRequest::post(endpoint("/books")).with_json(serde_json::json!({ "book": input }));
        self.fetch_one(request).await
    }

    /// `PATCH /api/v1/books/:id`. Only the set fields of `input` are sent.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` with status 422 on validation failure.
    pub async fn update_book(&self, id: &str, input: &UpdateBookInput) -> Result<Book, ApiError> {
        let request = HttpRequest::patch(book_endpoint(id)).with_json(serde_json::json!({ "book": input }));
        self.fetch_one(request).await
    }

    /// `DELETE /api/v1/books/:id`.
    ///
    /// # Errors
    ///
    /// Propagates transport and HTTP failures.
    pub async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(HttpRequest::delete(book_endpoint(id))).await
    }

    // =========================================================================
    // BORROWINGS
    // =========================================================================

    /// `GET /api/v1/borrowings`.
    ///
    /// # Errors
    ///
    /// Propagates transport, HTTP, and decode failures.
    pub async fn list_borrowings(&self, filters: &BorrowingFilters) -> Result<Page<Borrowing>, ApiError> {
        self.fetch_page(HttpRequest::get(endpoint("/borrowings")).with_query(filters.query())).await
    }

    /// `POST /api/v1/borrowings`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` when the book cannot be borrowed.
    pub async fn borrow_book(&self, book_id: &str) -> Result<Borrowing, ApiError> {
        let body = serde_json::json!({ "borrowing": { "book_id": book_id } });
        self.fetch_one(HttpRequest::post(endpoint("/borrowings")).with_json(body)).await
    }

    /// `PATCH /api/v1/borrowings/:id/return`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` when the borrowing cannot be returned.
    pub async fn return_book(&self, borrowing_id: &str) -> Result<Borrowing, ApiError> {
        self.fetch_one(HttpRequest::patch(borrowing_return_endpoint(borrowing_id))).await
    }

    // =========================================================================
    // INVITATIONS
    // =========================================================================

    /// `GET /api/v1/invitations`.
    ///
    /// # Errors
    ///
    /// Propagates transport, HTTP, and decode failures.
    pub async fn list_invitations(&self, filters: &InvitationFilters) -> Result<Page<Invitation>, ApiError> {
        self.fetch_page(HttpRequest::get(endpoint("/invitations")).with_query(filters.query())).await
    }

    /// `POST /api/v1/invitations`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` with status 422 on validation failure.
    pub async fn create_invitation(&self, email: &str) -> Result<Invitation, ApiError> {
        let body = serde_json::json!({ "invitation": { "email": email } });
        self.fetch_one(HttpRequest::post(endpoint("/invitations")).with_json(body)).await
    }

    /// `DELETE /api/v1/invitations/:id`.
    ///
    /// # Errors
    ///
    /// Propagates transport and HTTP failures.
    pub async fn delete_invitation(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(HttpRequest::delete(invitation_endpoint(id))).await
    }

    /// `GET /api/v1/invitations/token/:token`. Public; works without a session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` with status 404 for unknown tokens.
    pub async fn get_invitation_by_token(&self, token: &str) -> Result<Invitation, ApiError> {
        self.fetch_one(HttpRequest::get(invitation_token_endpoint(token))).await
    }

    /// `PATCH /api/v1/invitations/token/:token/accept`.
    ///
    /// Accepted or expired invitations are rejected by the server; the client
    /// does not pre-check the status.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` for unknown or terminal invitations.
    pub async fn accept_invitation(&self, token: &str, input: &AcceptInvitationInput) -> Result<(), ApiError> {
        let request =
            HttpRequest::patch(invitation_accept_endpoint(token)).with_json(serde_json::json!({ "user": input }));
        self.send_empty(request).await
    }

    // =========================================================================
    // DASHBOARD
    // =========================================================================

    /// `GET /api/v1/dashboard`. The server picks the shape from the caller's role.
    ///
    /// # Errors
    ///
    /// Returns a contract violation when the payload matches neither shape.
    pub async fn dashboard(&self, filters: &DashboardFilters) -> Result<DashboardData, ApiError> {
        let response = self.gateway.send(HttpRequest::get(endpoint("/dashboard")).with_query(filters.query())).await?;
        let envelope: DashboardResponse =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        DashboardData::from_value(envelope.data)
    }
}
