//! Role-based capability gating for book actions.
//!
//! DESIGN
//! ======
//! Views never branch on role directly. They ask [`BookActions::for_role`]
//! once per card and render what it allows; the server still enforces every
//! rule.

#[cfg(test)]
#[path = "capabilities_test.rs"]
mod capabilities_test;

use crate::net::types::{Book, Role};

/// What the signed-in user may do with one book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookActions {
    /// Members see a borrow button, enabled or not.
    pub show_borrow: bool,
    pub can_borrow: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl BookActions {
    #[must_use]
    pub fn for_role(role: Option<Role>, book: &Book) -> Self {
        match role {
            Some(Role::Member) => Self {
                show_borrow: true,
                can_borrow: book.is_available() && !already_borrowed(book),
                can_edit: false,
                can_delete: false,
            },
            Some(Role::Librarian) => Self { show_borrow: false, can_borrow: false, can_edit: true, can_delete: true },
            None => Self { show_borrow: false, can_borrow: false, can_edit: false, can_delete: false },
        }
    }

    #[must_use]
    pub fn has_management(&self) -> bool {
        self.can_edit || self.can_delete
    }
}

/// Librarians alone may add books to the catalogue.
#[must_use]
pub fn can_create_books(role: Option<Role>) -> bool {
    role == Some(Role::Librarian)
}

/// Invitation management is librarian-only, including its nav entry.
#[must_use]
pub fn can_manage_invitations(role: Option<Role>) -> bool {
    role == Some(Role::Librarian)
}

fn already_borrowed(book: &Book) -> bool {
    book.borrowed_by_current_user.unwrap_or(false)
}

/// Visible text of the borrow button.
#[must_use]
pub fn borrow_button_text(book: &Book, pending: bool) -> &'static str {
    if pending {
        "Borrowing..."
    } else if already_borrowed(book) {
        "Already Borrowed"
    } else if !book.is_available() {
        "Not Available"
    } else {
        "Borrow Book"
    }
}

/// Accessible label of the borrow button.
#[must_use]
pub fn borrow_button_label(book: &Book) -> String {
    if already_borrowed(book) {
        format!("You already borrowed {}", book.title)
    } else if !book.is_available() {
        format!("{} is not available", book.title)
    } else {
        format!("Borrow {}", book.title)
    }
}
