use super::*;

// =============================================================
// from_response
// =============================================================

#[test]
fn from_response_parses_error_entries() {
    let body = r#"{"errors":[{"status":"422","detail":"Title can't be blank"}]}"#;
    let err = ApiError::from_response(422, body);
    assert_eq!(
        err,
        ApiError::Http {
            status: 422,
            errors: vec![ErrorDetail { status: "422".to_owned(), detail: "Title can't be blank".to_owned() }],
        }
    );
}

#[test]
fn from_response_accepts_numeric_status_entries() {
    let err = ApiError::from_response(404, r#"{"errors":[{"status":404,"detail":"Invitation not found"}]}"#);
    assert_eq!(err.first_detail(), Some("Invitation not found"));
}

#[test]
fn from_response_reads_null_status_as_empty() {
    let body = r#"{"errors":[{"status":null,"detail":"Email has already been taken"},{"status":"422","detail":null}]}"#;
    let err = ApiError::from_response(422, body);
    assert_eq!(
        err,
        ApiError::Http {
            status: 422,
            errors: vec![
                ErrorDetail { status: String::new(), detail: "Email has already been taken".to_owned() },
                ErrorDetail { status: "422".to_owned(), detail: String::new() },
            ],
        }
    );
    assert_eq!(err.first_detail(), Some("Email has already been taken"));
}

#[test]
fn from_response_tolerates_non_json_body() {
    let err = ApiError::from_response(500, "<html>oops</html>");
    assert_eq!(err, ApiError::Http { status: 500, errors: vec![] });
}

#[test]
fn from_response_tolerates_empty_body() {
    assert_eq!(ApiError::from_response(403, ""), ApiError::Http { status: 403, errors: vec![] });
}

// =============================================================
// Classification
// =============================================================

#[test]
fn unauthorized_is_status_401_only() {
    assert!(ApiError::from_response(401, "").is_unauthorized());
    assert!(!ApiError::from_response(403, "").is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
}

#[test]
fn retryable_covers_network_and_server_errors() {
    assert!(ApiError::Network("offline".to_owned()).is_retryable());
    assert!(ApiError::from_response(503, "").is_retryable());
    assert!(!ApiError::from_response(422, "").is_retryable());
    assert!(!ApiError::from_response(401, "").is_retryable());
    assert!(!ApiError::Contract(ContractViolation::ExpectedSingleRecord).is_retryable());
    assert!(!ApiError::Decode("bad".to_owned()).is_retryable());
}

#[test]
fn contract_violation_converts_via_from() {
    let err: ApiError = ContractViolation::UnknownDashboardShape.into();
    assert!(err.is_contract_violation());
}

// =============================================================
// Messages
// =============================================================

#[test]
fn user_message_prefers_server_detail() {
    let err = ApiError::from_response(422, r#"{"errors":[{"status":"422","detail":"Email taken"}]}"#);
    assert_eq!(err.user_message("Signup failed"), "Email taken");
}

#[test]
fn user_message_falls_back_without_detail() {
    let err = ApiError::Network("connection reset".to_owned());
    assert_eq!(err.user_message("Signup failed"), "Signup failed");
}

#[test]
fn user_message_masks_contract_violations() {
    let err = ApiError::Contract(ContractViolation::ExpectedSingleRecord);
    assert_eq!(err.user_message("ignored"), "Received unexpected data from the server.");
}

#[test]
fn role_mismatch_display_names_both_roles() {
    let err = ContractViolation::DashboardRoleMismatch { expected: Role::Member, found: Role::Librarian };
    assert_eq!(err.to_string(), "librarian dashboard data returned for a member session");
}
