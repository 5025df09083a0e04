//! Catalogue card for one book, with role-gated actions.

use leptos::prelude::*;

use crate::net::types::Book;
use crate::state::session::Session;
use crate::util::capabilities::{BookActions, borrow_button_label, borrow_button_text};

#[component]
pub fn BookCard(
    book: Book,
    #[prop(into)] borrowing: Signal<bool>,
    #[prop(optional)] on_borrow: Option<Callback<String>>,
    #[prop(optional)] on_edit: Option<Callback<Book>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let actions = BookActions::for_role(session.role(), &book);
    let available = book.is_available();
    let badge_class = if available { "badge badge--ok" } else { "badge badge--bad" };
    let label = borrow_button_label(&book);
    let book = StoredValue::new(book);
    let id = move || book.with_value(|b| b.id.clone());

    view! {
        <div class="book-card">
            <div class="book-card__head">
                <div class="book-card__titles">
                    <h3 class="book-card__title">{book.with_value(|b| b.title.clone())}</h3>
                    <p class="book-card__author">{book.with_value(|b| b.author.clone())}</p>
                </div>
                <span class=badge_class>
                    {if available { "Available" } else { "Unavailable" }}
                </span>
            </div>
            <dl class="book-card__facts">
                <dt>"Genre"</dt>
                <dd>{book.with_value(|b| b.genre.clone())}</dd>
                <dt>"ISBN"</dt>
                <dd class="mono">{book.with_value(|b| b.isbn.clone())}</dd>
                <dt>"Copies"</dt>
                <dd>{book.with_value(|b| format!("{} / {} available", b.available_copies, b.total_copies))}</dd>
            </dl>
            <Show when=move || actions.show_borrow>
                <button
                    class="btn btn--primary book-card__borrow"
                    aria-label=label.clone()
                    disabled=move || !actions.can_borrow || on_borrow.is_none() || borrowing.get()
                    on:click=move |_| {
                        if let Some(on_borrow) = on_borrow {
                            on_borrow.run(id());
                        }
                    }
                >
                    {move || book.with_value(|b| borrow_button_text(b, borrowing.get()))}
                </button>
            </Show>
            <Show when=move || actions.has_management()>
                <div class="book-card__manage">
                    {on_edit.map(|on_edit| view! {
                        <button class="btn" on:click=move |_| on_edit.run(book.get_value())>"Edit"</button>
                    })}
                    {on_delete.map(|on_delete| view! {
                        <button class="btn btn--danger" on:click=move |_| on_delete.run(id())>"Delete"</button>
                    })}
                </div>
            </Show>
        </div>
    }
}
