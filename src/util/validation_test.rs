use super::*;

fn signup(name: &str, email: &str, password: &str, confirmation: &str) -> SignupCredentials {
    SignupCredentials {
        email: email.to_owned(),
        password: password.to_owned(),
        password_confirmation: confirmation.to_owned(),
        name: name.to_owned(),
    }
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_shape_accepts_common_addresses() {
    assert!(is_email("test@example.com"));
    assert!(is_email("  a.b+c@lib.example.org "));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in ["", "plain", "@example.com", "a@b", "a@b.", "a b@example.com", "a@@example.com"] {
        assert!(!is_email(bad), "{bad} should be rejected");
    }
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_requires_both_fields() {
    let errors = validate_login(&LoginCredentials { email: " ".to_owned(), password: String::new() });
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
}

#[test]
fn complete_login_passes() {
    let errors = validate_login(&LoginCredentials {
        email: "test@example.com".to_owned(),
        password: "password123".to_owned(),
    });
    assert!(errors.is_empty());
}

// =============================================================
// Signup and acceptance
// =============================================================

#[test]
fn signup_reports_first_failure_per_field() {
    let errors = validate_signup(&signup("", "", "abc", ""));
    assert_eq!(errors.get("name"), Some("Name is required"));
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
    assert_eq!(errors.get("password_confirmation"), Some("Password confirmation is required"));
}

#[test]
fn signup_rejects_mismatched_confirmation() {
    let errors = validate_signup(&signup("Test User", "test@example.com", "secret1", "secret2"));
    assert_eq!(errors.get("password_confirmation"), Some("Passwords don't match"));
    assert_eq!(errors.get("password"), None);
}

#[test]
fn valid_signup_passes() {
    assert!(validate_signup(&signup("Test User", "test@example.com", "secret1", "secret1")).is_empty());
}

#[test]
fn acceptance_skips_email() {
    let input = AcceptInvitationInput {
        name: "Lib".to_owned(),
        password: "secret1".to_owned(),
        password_confirmation: "secret1".to_owned(),
    };
    assert!(validate_acceptance(&input).is_empty());
}

// =============================================================
// Invitation and book forms
// =============================================================

#[test]
fn invitation_email_must_be_valid() {
    assert_eq!(validate_invitation_email("nope").get("email"), Some("Invalid email address"));
    assert!(validate_invitation_email("new@example.com").is_empty());
}

#[test]
fn book_form_requires_every_field() {
    let errors = validate_book(&CreateBookInput::default());
    assert_eq!(errors.get("title"), Some("Title is required"));
    assert_eq!(errors.get("isbn"), Some("ISBN is required"));
    assert_eq!(errors.get("total_copies"), Some("Must have at least 1 copy"));
}
