//! Role-dependent dashboard landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. The server decides the payload shape
//! from its view of the caller; this page cross-checks that shape against
//! the session role before rendering anything.
//!
//! DESIGN
//! ======
//! [`resolve_dashboard_view`] is the only place role and payload meet. A
//! mismatch (member session, librarian-shaped data, or the reverse) is a
//! contract violation and renders the generic unexpected-data state rather
//! than either panel.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::retry_panel::RetryPanel;
use crate::net::api::ApiClient;
use crate::net::dashboard::{BorrowedBook, DashboardData, LibrarianDashboard, MemberDashboard};
use crate::net::error::{ApiError, ContractViolation};
use crate::net::types::{DashboardFilters, Role};
use crate::state::fetch::FetchState;
use crate::state::session::Session;
use crate::util::fetch::{FetchGeneration, RetryPolicy, run_query};
use crate::util::format::{count_label, display_date};

/// Days-until-due at or below which a borrowing is flagged as due soon.
pub const DUE_SOON_DAYS: i64 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Librarian(LibrarianDashboard),
    Member(MemberDashboard),
    Mismatch(ContractViolation),
}

/// Pair fetched data with the session role.
#[must_use]
pub fn resolve_dashboard_view(role: Role, data: DashboardData) -> DashboardView {
    match (role, data) {
        (Role::Librarian, DashboardData::Librarian(data)) => DashboardView::Librarian(data),
        (Role::Member, DashboardData::Member(data)) => DashboardView::Member(data),
        (expected, data) => {
            DashboardView::Mismatch(ContractViolation::DashboardRoleMismatch { expected, found: data.role() })
        }
    }
}

/// Urgency of one active borrowing on the member dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueStatus {
    Overdue(u32),
    DueSoon(i64),
    OnTrack(i64),
}

impl DueStatus {
    #[must_use]
    pub fn of(book: &BorrowedBook) -> Self {
        if book.is_overdue {
            Self::Overdue(book.days_overdue)
        } else if book.days_until_due <= DUE_SOON_DAYS {
            Self::DueSoon(book.days_until_due)
        } else {
            Self::OnTrack(book.days_until_due)
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Overdue(days) => format!("Overdue by {}", count_label(u64::from(days), "day")),
            Self::DueSoon(days) => format!("Due in {}", count_label(days.unsigned_abs(), "day")),
            Self::OnTrack(days) => format!("{} left", count_label(days.unsigned_abs(), "day")),
        }
    }

    fn modifier(self) -> &'static str {
        match self {
            Self::Overdue(_) => "badge--bad",
            Self::DueSoon(_) => "badge--warn",
            Self::OnTrack(_) => "badge--ok",
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = StoredValue::new(expect_context::<ApiClient>());
    let policy = expect_context::<RetryPolicy>();
    let state = RwSignal::new(FetchState::<DashboardData>::Loading);
    let page = RwSignal::new(1_u32);
    let generation = FetchGeneration::new();

    let reload = Callback::new({
        let generation = generation.clone();
        move |()| {
            let filters = DashboardFilters { page: Some(page.get_untracked()), per_page: None };
            run_query(&generation, policy, state, api.get_value(), move |api| {
                let filters = filters.clone();
                async move { api.dashboard(&filters).await }
            });
        }
    });

    Effect::new(move || {
        page.track();
        reload.run(());
    });
    on_cleanup(move || generation.invalidate());

    let on_page_change = Callback::new(move |next: u32| page.set(next));

    view! {
        <div class="dashboard-page">
            <h1 class="page-title">"Dashboard"</h1>
            <p class="page-subtitle">
                {move || session.user().map(|u| format!("Welcome back, {}", u.name)).unwrap_or_default()}
            </p>
            {move || match state.get() {
                FetchState::Loading => view! { <p class="loading">"Loading dashboard..."</p> }.into_any(),
                FetchState::Failed(err) => {
                    view! {
                        <RetryPanel
                            message=err.user_message("Failed to load dashboard. Please try again.")
                            on_retry=reload
                        />
                    }
                        .into_any()
                }
                FetchState::Ready(data) => {
                    let Some(role) = session.role() else {
                        return ().into_any();
                    };
                    match resolve_dashboard_view(role, data) {
                        DashboardView::Librarian(data) => {
                            view! { <LibrarianPanel data=data on_page_change=on_page_change/> }.into_any()
                        }
                        DashboardView::Member(data) => view! { <MemberPanel data=data on_page_change=on_page_change/> }.into_any(),
                        DashboardView::Mismatch(violation) => {
                            warn!("dashboard: {violation}");
                            view! {
                                <RetryPanel
                                    message=ApiError::from(violation).user_message("")
                                    on_retry=reload
                                />
                            }
                                .into_any()
                        }
                    }
                }
            }}
        </div>
    }
}

#[component]
fn StatCard(#[prop(into)] title: String, value: u32, #[prop(into)] tone: String) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{tone}")>
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}

#[component]
fn LibrarianPanel(data: LibrarianDashboard, on_page_change: Callback<u32>) -> impl IntoView {
    let members = data.members_with_overdue;
    let empty = members.is_empty();

    view! {
        <div class="dashboard-panel">
            <div class="stat-grid">
                <StatCard title="Total Books" value=data.total_books tone="blue"/>
                <StatCard title="Currently Borrowed" value=data.total_borrowed_books tone="yellow"/>
                <StatCard title="Due Today" value=data.books_due_today tone="red"/>
            </div>
            <section class="panel">
                <header class="panel__header">
                    <h2>"Members with Overdue Books"</h2>
                    <p>{format!("{} with overdue books", count_label(u64::from(data.pagination.total_count), "member"))}</p>
                </header>
                {if empty {
                    view! {
                        <div class="empty-state">
                            <h3>"All Clear!"</h3>
                            <p>"No members have overdue books."</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Member"</th>
                                    <th>"Email"</th>
                                    <th>"Overdue Books"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {members
                                    .into_iter()
                                    .map(|member| {
                                        view! {
                                            <tr>
                                                <td>{member.name}</td>
                                                <td>{member.email}</td>
                                                <td>
                                                    <span class="badge badge--bad">
                                                        {count_label(u64::from(member.overdue_count), "book")}
                                                    </span>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                        <Pagination meta=data.pagination on_page_change=on_page_change/>
                    }
                        .into_any()
                }}
            </section>
        </div>
    }
}

#[component]
fn MemberPanel(data: MemberDashboard, on_page_change: Callback<u32>) -> impl IntoView {
    let overdue_count = data.overdue_books.len();
    let borrowed = data.borrowed_books;
    let empty = borrowed.is_empty();

    view! {
        <div class="dashboard-panel">
            <div class="stat-grid">
                <StatCard title="Currently Borrowed" value=data.summary.total_borrowed tone="blue"/>
                <StatCard title="Overdue Books" value=data.summary.total_overdue tone="red"/>
            </div>
            {(overdue_count > 0).then(|| view! {
                <div class="alert alert--danger" role="alert">
                    <h3>{format!("You have {} overdue", count_label(overdue_count as u64, "book"))}</h3>
                    <p>"Please return these books as soon as possible to avoid late fees."</p>
                </div>
            })}
            <section class="panel">
                <header class="panel__header">
                    <h2>"My Borrowed Books"</h2>
                    <p>{count_label(u64::from(data.pagination.total_count), "active borrowing")}</p>
                </header>
                {if empty {
                    view! {
                        <div class="empty-state">
                            <h3>"No Active Borrowings"</h3>
                            <p>"You don't have any borrowed books at the moment."</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <ul class="borrowed-list">
                            {borrowed
                                .into_iter()
                                .map(|item| {
                                    let due = DueStatus::of(&item);
                                    view! {
                                        <li class="borrowed-list__item">
                                            <div>
                                                <h3>{item.book.title}</h3>
                                                <p class="muted">{format!("by {}", item.book.author)}</p>
                                                <p class="borrowed-list__dates">
                                                    {format!(
                                                        "Borrowed: {}  Due: {}",
                                                        display_date(&item.borrowed_at),
                                                        display_date(&item.due_date),
                                                    )}
                                                </p>
                                            </div>
                                            <span class=format!("badge {}", due.modifier())>{due.label()}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <Pagination meta=data.pagination on_page_change=on_page_change/>
                    }
                        .into_any()
                }}
            </section>
        </div>
    }
}
