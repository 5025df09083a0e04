use super::*;
use crate::net::dashboard::{BookSummary, MemberSummary};
use crate::net::envelope::PaginationMeta;

fn librarian_data() -> LibrarianDashboard {
    LibrarianDashboard {
        total_books: 100,
        total_borrowed_books: 25,
        books_due_today: 5,
        members_with_overdue: Vec::new(),
        pagination: PaginationMeta::default(),
    }
}

fn member_data() -> MemberDashboard {
    MemberDashboard {
        borrowed_books: Vec::new(),
        overdue_books: Vec::new(),
        summary: MemberSummary { total_borrowed: 0, total_overdue: 0 },
        pagination: PaginationMeta::default(),
    }
}

fn borrowed(days_until_due: i64, is_overdue: bool, days_overdue: u32) -> BorrowedBook {
    BorrowedBook {
        id: 1,
        book: BookSummary { id: 1, title: "The Great Gatsby".to_owned(), author: "F. Scott Fitzgerald".to_owned() },
        borrowed_at: "2024-01-01T00:00:00Z".to_owned(),
        due_date: "2024-01-15T00:00:00Z".to_owned(),
        days_until_due,
        is_overdue,
        days_overdue,
    }
}

// =============================================================
// resolve_dashboard_view
// =============================================================

#[test]
fn matching_role_dispatches_to_its_panel() {
    assert_eq!(
        resolve_dashboard_view(Role::Librarian, DashboardData::Librarian(librarian_data())),
        DashboardView::Librarian(librarian_data())
    );
    assert_eq!(
        resolve_dashboard_view(Role::Member, DashboardData::Member(member_data())),
        DashboardView::Member(member_data())
    );
}

#[test]
fn member_session_with_librarian_data_is_a_mismatch() {
    assert_eq!(
        resolve_dashboard_view(Role::Member, DashboardData::Librarian(librarian_data())),
        DashboardView::Mismatch(ContractViolation::DashboardRoleMismatch {
            expected: Role::Member,
            found: Role::Librarian,
        })
    );
}

#[test]
fn librarian_session_with_member_data_is_a_mismatch() {
    let view = resolve_dashboard_view(Role::Librarian, DashboardData::Member(member_data()));
    assert!(matches!(
        view,
        DashboardView::Mismatch(ContractViolation::DashboardRoleMismatch { expected: Role::Librarian, .. })
    ));
}

#[test]
fn mismatch_renders_generic_message() {
    let violation = ContractViolation::DashboardRoleMismatch { expected: Role::Member, found: Role::Librarian };
    assert_eq!(ApiError::from(violation).user_message(""), "Received unexpected data from the server.");
}

// =============================================================
// DueStatus
// =============================================================

#[test]
fn overdue_wins_over_days_until_due() {
    let status = DueStatus::of(&borrowed(-2, true, 2));
    assert_eq!(status, DueStatus::Overdue(2));
    assert_eq!(status.label(), "Overdue by 2 days");
}

#[test]
fn due_within_three_days_is_flagged() {
    assert_eq!(DueStatus::of(&borrowed(3, false, 0)), DueStatus::DueSoon(3));
    assert_eq!(DueStatus::of(&borrowed(1, false, 0)).label(), "Due in 1 day");
}

#[test]
fn later_due_dates_are_on_track() {
    let status = DueStatus::of(&borrowed(10, false, 0));
    assert_eq!(status, DueStatus::OnTrack(10));
    assert_eq!(status.label(), "10 days left");
}
