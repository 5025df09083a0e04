//! Borrowing history with status filter and return action.

use leptos::prelude::*;

use crate::components::borrowing_card::BorrowingCard;
use crate::components::pagination::Pagination;
use crate::components::retry_panel::RetryPanel;
use crate::components::toast::{Toast, ToastMessage};
use crate::config::LIST_PER_PAGE;
use crate::net::api::ApiClient;
use crate::net::envelope::Page;
use crate::net::types::{Borrowing, BorrowingFilters, BorrowingStatus, Role};
use crate::state::fetch::FetchState;
use crate::state::session::Session;
use crate::util::fetch::{FetchGeneration, RetryPolicy, ViewScope, run_query, spawn_task};
use crate::util::format::count_label;

fn filter_label(status: Option<BorrowingStatus>) -> &'static str {
    match status {
        None => "All",
        Some(BorrowingStatus::Active) => "Active",
        Some(BorrowingStatus::Returned) => "Returned",
        Some(BorrowingStatus::Overdue) => "Overdue",
    }
}

#[component]
pub fn BorrowingsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = StoredValue::new(expect_context::<ApiClient>());
    let policy = expect_context::<RetryPolicy>();
    let generation = FetchGeneration::new();
    let scope = ViewScope::mounted();

    let filters = RwSignal::new(BorrowingFilters { status: None, page: Some(1), per_page: Some(LIST_PER_PAGE) });
    let state = RwSignal::new(FetchState::<Page<Borrowing>>::Loading);
    let returning_id = RwSignal::new(None::<String>);
    let toast = RwSignal::new(None::<ToastMessage>);

    let reload = Callback::new({
        let generation = generation.clone();
        move |()| {
            let current = filters.get_untracked();
            run_query(&generation, policy, state, api.get_value(), move |api| {
                let current = current.clone();
                async move { api.list_borrowings(&current).await }
            });
        }
    });

    Effect::new(move || {
        filters.track();
        reload.run(());
    });
    on_cleanup(move || generation.invalidate());

    let on_page_change = Callback::new(move |page: u32| filters.update(|f| f.page = Some(page)));

    let on_return = Callback::new(move |borrowing_id: String| {
        if returning_id.get_untracked().is_some() {
            return;
        }
        returning_id.set(Some(borrowing_id.clone()));
        let api = api.get_value();
        let scope = scope.clone();
        spawn_task(async move {
            let Some(result) = scope.finish(api.return_book(&borrowing_id)).await else {
                return;
            };
            match result {
                Ok(borrowing) => {
                    toast.set(Some(ToastMessage::success(format!("Returned {}", borrowing.book_title))));
                    reload.run(());
                }
                Err(err) => toast.set(Some(ToastMessage::error(err.user_message("Failed to return book")))),
            }
            returning_id.set(None);
        });
    });

    let heading = move || if session.role() == Some(Role::Librarian) { "Borrowings" } else { "My Borrowings" };
    let active_status = move || filters.with(|f| f.status);

    view! {
        <div class="list-page borrowings-page">
            <div class="list-page__header">
                <div>
                    <h1 class="page-title">{heading}</h1>
                    <p class="page-subtitle">
                        {move || {
                            let total = state.with(|s| s.ready().map_or(0, |p| p.meta.total_count));
                            count_label(u64::from(total), "borrowing")
                        }}
                    </p>
                </div>
            </div>

            <div class="segmented">
                {std::iter::once(None)
                    .chain(BorrowingStatus::ALL.into_iter().map(Some))
                    .map(|status| {
                        view! {
                            <button
                                class="btn segmented__item"
                                class:segmented__item--active=move || active_status() == status
                                on:click=move |_| {
                                    filters.update(|f| {
                                        f.status = status;
                                        f.page = Some(1);
                                    });
                                }
                            >
                                {filter_label(status)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match state.get() {
                FetchState::Loading => view! { <p class="loading">"Loading borrowings..."</p> }.into_any(),
                FetchState::Failed(err) => {
                    view! {
                        <RetryPanel
                            message=err.user_message("Failed to load borrowings. Please try again.")
                            on_retry=reload
                        />
                    }
                        .into_any()
                }
                FetchState::Ready(page) if page.items.is_empty() => {
                    let detail = match active_status() {
                        Some(status) => format!("You don't have any {} borrowings.", status.as_str()),
                        None => "You haven't borrowed any books yet.".to_owned(),
                    };
                    view! {
                        <div class="empty-state">
                            <h3>"No borrowings found"</h3>
                            <p>{detail}</p>
                        </div>
                    }
                        .into_any()
                }
                FetchState::Ready(page) => {
                    view! {
                        <div class="card-grid">
                            {page
                                .items
                                .into_iter()
                                .map(|borrowing| {
                                    let id = borrowing.id.clone();
                                    view! {
                                        <BorrowingCard
                                            borrowing=borrowing
                                            returning=Signal::derive(move || returning_id.get().as_deref() == Some(id.as_str()))
                                            on_return=on_return
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                        <Pagination meta=page.meta on_page_change=on_page_change/>
                    }
                        .into_any()
                }
            }}

            {move || {
                toast.get().map(|message| view! { <Toast message=message on_close=Callback::new(move |()| toast.set(None))/> })
            }}
        </div>
    }
}
