//! Client-side form checks run before a request is sent.
//!
//! The server re-validates everything; these only spare a round trip for
//! obviously incomplete forms. Messages render under the offending field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{AcceptInvitationInput, CreateBookInput, LoginCredentials, SignupCredentials};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Per-field messages, first failure per field only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<(&'static str, &'static str)>);

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, message)| *message)
    }

    fn check(&mut self, field: &'static str, ok: bool, message: &'static str) {
        if !ok && self.get(field).is_none() {
            self.0.push((field, message));
        }
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Loose shape check: `local@domain.tld`, no whitespace.
#[must_use]
pub fn is_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !value.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

fn check_email(errors: &mut FormErrors, email: &str) {
    errors.check("email", filled(email), "Email is required");
    errors.check("email", is_email(email), "Invalid email address");
}

fn check_new_password(errors: &mut FormErrors, password: &str, confirmation: &str) {
    errors.check("password", password.chars().count() >= MIN_PASSWORD_LEN, "Password must be at least 6 characters");
    errors.check("password_confirmation", !confirmation.is_empty(), "Password confirmation is required");
    errors.check("password_confirmation", password == confirmation, "Passwords don't match");
}

#[must_use]
pub fn validate_login(credentials: &LoginCredentials) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check("email", filled(&credentials.email), "Email is required");
    errors.check("password", !credentials.password.is_empty(), "Password is required");
    errors
}

#[must_use]
pub fn validate_signup(credentials: &SignupCredentials) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check("name", filled(&credentials.name), "Name is required");
    check_email(&mut errors, &credentials.email);
    check_new_password(&mut errors, &credentials.password, &credentials.password_confirmation);
    errors
}

#[must_use]
pub fn validate_acceptance(input: &AcceptInvitationInput) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check("name", filled(&input.name), "Name is required");
    check_new_password(&mut errors, &input.password, &input.password_confirmation);
    errors
}

#[must_use]
pub fn validate_invitation_email(email: &str) -> FormErrors {
    let mut errors = FormErrors::default();
    check_email(&mut errors, email);
    errors
}

#[must_use]
pub fn validate_book(input: &CreateBookInput) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check("title", filled(&input.title), "Title is required");
    errors.check("author", filled(&input.author), "Author is required");
    errors.check("genre", filled(&input.genre), "Genre is required");
    errors.check("isbn", filled(&input.isbn), "ISBN is required");
    errors.check("total_copies", input.total_copies >= 1, "Must have at least 1 copy");
    errors
}
