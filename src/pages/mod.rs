//! Route-level views.
//!
//! Each page owns its fetch state and local form signals. Pages under
//! `ProtectedRoute` assume an authenticated session; the public pages
//! (login, signup, invitation acceptance) install their own redirect.

pub mod accept_invitation;
pub mod books;
pub mod borrowings;
pub mod dashboard;
pub mod invitations;
pub mod login;
pub mod signup;
