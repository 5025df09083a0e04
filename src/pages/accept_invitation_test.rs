use super::*;
use crate::net::error::{ApiError, ContractViolation};

fn invitation(status: InvitationStatus) -> Invitation {
    Invitation {
        id: "7".to_owned(),
        email: "new.librarian@example.com".to_owned(),
        role: "librarian".to_owned(),
        expires_at: "2024-02-01T00:00:00Z".to_owned(),
        accepted_at: None,
        status,
        created_at: "2024-01-25T00:00:00Z".to_owned(),
        invited_by_id: Some("1".to_owned()),
    }
}

// =============================================================================
// LOOKUP STATES
// =============================================================================

#[test]
fn loading_lookup_shows_loading() {
    assert_eq!(accept_screen(&FetchState::Loading, false), AcceptScreen::Loading);
}

#[test]
fn failed_lookup_is_invalid() {
    let failed = FetchState::Failed(ApiError::Http { status: 404, errors: Vec::new() });
    assert_eq!(accept_screen(&failed, false), AcceptScreen::Invalid);
}

#[test]
fn gone_lookup_is_invalid() {
    let failed = FetchState::Failed(ApiError::from_response(410, ""));
    assert_eq!(accept_screen(&failed, false), AcceptScreen::Invalid);
}

#[test]
fn network_failure_keeps_the_link_and_offers_retry() {
    let failed = FetchState::Failed(ApiError::Network("offline".to_owned()));
    assert_eq!(
        accept_screen(&failed, false),
        AcceptScreen::Failed("Failed to load invitation. Please try again.".to_owned())
    );
}

#[test]
fn server_failure_offers_retry_with_server_detail() {
    let bare = FetchState::Failed(ApiError::from_response(503, ""));
    assert_eq!(
        accept_screen(&bare, false),
        AcceptScreen::Failed("Failed to load invitation. Please try again.".to_owned())
    );

    let detailed =
        FetchState::Failed(ApiError::from_response(500, r#"{"errors":[{"status":"500","detail":"Database unavailable"}]}"#));
    assert_eq!(accept_screen(&detailed, false), AcceptScreen::Failed("Database unavailable".to_owned()));
}

#[test]
fn unexpected_payload_is_reported_not_marked_invalid() {
    let expected = AcceptScreen::Failed("Received unexpected data from the server.".to_owned());
    let contract = FetchState::Failed(ApiError::Contract(ContractViolation::ExpectedSingleRecord));
    let decode = FetchState::Failed(ApiError::Decode("missing field `token`".to_owned()));
    assert_eq!(accept_screen(&contract, false), expected);
    assert_eq!(accept_screen(&decode, false), expected);
}

#[test]
fn terminal_statuses_get_their_own_screens() {
    let expired = FetchState::Ready(invitation(InvitationStatus::Expired));
    let accepted = FetchState::Ready(invitation(InvitationStatus::Accepted));
    assert_eq!(accept_screen(&expired, false), AcceptScreen::Expired);
    assert_eq!(accept_screen(&accepted, false), AcceptScreen::AlreadyAccepted);
}

#[test]
fn pending_invitation_shows_form() {
    let pending = invitation(InvitationStatus::Pending);
    assert_eq!(accept_screen(&FetchState::Ready(pending.clone()), false), AcceptScreen::Form(pending));
}

// =============================================================================
// SUCCESS
// =============================================================================

#[test]
fn created_overrides_any_lookup() {
    assert_eq!(accept_screen(&FetchState::Loading, true), AcceptScreen::Created);
    let accepted = FetchState::Ready(invitation(InvitationStatus::Accepted));
    assert_eq!(accept_screen(&accepted, true), AcceptScreen::Created);
}
