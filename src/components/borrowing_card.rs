//! Card for one borrowing record.

use leptos::prelude::*;

use crate::net::types::{Borrowing, BorrowingStatus};
use crate::util::format::display_date;

fn status_modifier(status: BorrowingStatus) -> &'static str {
    match status {
        BorrowingStatus::Active => "badge--info",
        BorrowingStatus::Returned => "badge--ok",
        BorrowingStatus::Overdue => "badge--bad",
    }
}

#[component]
pub fn BorrowingCard(
    borrowing: Borrowing,
    #[prop(into)] returning: Signal<bool>,
    #[prop(optional)] on_return: Option<Callback<String>>,
) -> impl IntoView {
    let overdue = borrowing.status == BorrowingStatus::Overdue;
    let returned_at = (borrowing.status == BorrowingStatus::Returned)
        .then(|| borrowing.returned_at.clone())
        .flatten();
    let returnable = borrowing.is_returnable();
    let id = borrowing.id.clone();
    let aria = format!("Return {}", borrowing.book_title);

    view! {
        <div class="borrowing-card">
            <div class="borrowing-card__head">
                <h3 class="borrowing-card__title">{borrowing.book_title.clone()}</h3>
                <span class=format!("badge {}", status_modifier(borrowing.status))>{borrowing.status.as_str()}</span>
            </div>
            <dl class="borrowing-card__facts">
                <dt>"Borrowed"</dt>
                <dd>{display_date(&borrowing.borrowed_at).to_owned()}</dd>
                <dt>"Due Date"</dt>
                <dd class:text-danger=overdue>{display_date(&borrowing.due_date).to_owned()}</dd>
                {returned_at.map(|at| view! {
                    <dt>"Returned"</dt>
                    <dd>{display_date(&at).to_owned()}</dd>
                })}
                {overdue.then(|| view! {
                    <dt>"Days Overdue"</dt>
                    <dd class="text-danger">{borrowing.days_overdue}</dd>
                })}
            </dl>
            {on_return.filter(|_| returnable).map(|on_return| view! {
                <button
                    class="btn btn--primary borrowing-card__return"
                    aria-label=aria
                    disabled=move || returning.get()
                    on:click=move |_| on_return.run(id.clone())
                >
                    {move || if returning.get() { "Returning..." } else { "Return Book" }}
                </button>
            })}
        </div>
    }
}
