//! Book catalogue: search, paging, borrowing, and librarian management.

use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::components::book_form::{BookForm, changed_fields};
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::retry_panel::RetryPanel;
use crate::components::toast::{Toast, ToastMessage};
use crate::config::LIST_PER_PAGE;
use crate::net::api::ApiClient;
use crate::net::envelope::Page;
use crate::net::types::{Book, BookFilters, CreateBookInput};
use crate::state::fetch::FetchState;
use crate::state::session::Session;
use crate::util::capabilities::can_create_books;
use crate::util::fetch::{FetchGeneration, RetryPolicy, ViewScope, run_query, spawn_task};
use crate::util::format::count_label;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Editor {
    Closed,
    Create,
    Edit(Book),
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn BooksPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = StoredValue::new(expect_context::<ApiClient>());
    let policy = expect_context::<RetryPolicy>();
    let generation = FetchGeneration::new();
    let scope = ViewScope::mounted();

    let filters = RwSignal::new(BookFilters { page: Some(1), per_page: Some(LIST_PER_PAGE), ..BookFilters::default() });
    let state = RwSignal::new(FetchState::<Page<Book>>::Loading);
    let title = RwSignal::new(String::new());
    let author = RwSignal::new(String::new());
    let genre = RwSignal::new(String::new());

    let borrowing_id = RwSignal::new(None::<String>);
    let editor = RwSignal::new(Editor::Closed);
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    let toast = RwSignal::new(None::<ToastMessage>);

    let reload = Callback::new({
        let generation = generation.clone();
        move |()| {
            let current = filters.get_untracked();
            run_query(&generation, policy, state, api.get_value(), move |api| {
                let current = current.clone();
                async move { api.list_books(&current).await }
            });
        }
    });

    Effect::new(move || {
        filters.track();
        reload.run(());
    });
    on_cleanup(move || generation.invalidate());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        filters.update(|f| {
            f.title = non_blank(title.get_untracked());
            f.author = non_blank(author.get_untracked());
            f.genre = non_blank(genre.get_untracked());
            f.page = Some(1);
        });
    };
    let on_clear = move |_| {
        title.set(String::new());
        author.set(String::new());
        genre.set(String::new());
        filters.set(BookFilters { page: Some(1), per_page: Some(LIST_PER_PAGE), ..BookFilters::default() });
    };
    let on_page_change = Callback::new(move |page: u32| filters.update(|f| f.page = Some(page)));

    let on_borrow = Callback::new({
        let scope = scope.clone();
        move |book_id: String| {
            if borrowing_id.get_untracked().is_some() {
                return;
            }
            borrowing_id.set(Some(book_id.clone()));
            let api = api.get_value();
            let scope = scope.clone();
            spawn_task(async move {
                let Some(result) = scope.finish(api.borrow_book(&book_id)).await else {
                    return;
                };
                match result {
                    Ok(borrowing) => {
                        toast.set(Some(ToastMessage::success(format!("Borrowed {}", borrowing.book_title))));
                        reload.run(());
                    }
                    Err(err) => toast.set(Some(ToastMessage::error(err.user_message("Failed to borrow book")))),
                }
                borrowing_id.set(None);
            });
        }
    });

    let on_edit = Callback::new(move |book: Book| {
        form_error.set(None);
        editor.set(Editor::Edit(book));
    });

    let on_delete = Callback::new({
        let scope = scope.clone();
        move |book_id: String| {
            let api = api.get_value();
            let scope = scope.clone();
            spawn_task(async move {
                let Some(result) = scope.finish(api.delete_book(&book_id)).await else {
                    return;
                };
                match result {
                    Ok(()) => {
                        toast.set(Some(ToastMessage::success("Book deleted successfully")));
                        reload.run(());
                    }
                    Err(err) => toast.set(Some(ToastMessage::error(err.user_message("Failed to delete book")))),
                }
            });
        }
    });

    let on_save = Callback::new(move |input: CreateBookInput| {
        let target = editor.get_untracked();
        if saving.get_untracked() || target == Editor::Closed {
            return;
        }
        saving.set(true);
        form_error.set(None);
        let api = api.get_value();
        let scope = scope.clone();
        spawn_task(async move {
            let request = async {
                match &target {
                    Editor::Edit(original) => api.update_book(&original.id, &changed_fields(original, &input)).await,
                    _ => api.create_book(&input).await,
                }
            };
            let Some(result) = scope.finish(request).await else {
                return;
            };
            match result {
                Ok(book) => {
                    let verb = if matches!(target, Editor::Edit(_)) { "updated" } else { "added" };
                    toast.set(Some(ToastMessage::success(format!("{} {verb}", book.title))));
                    editor.set(Editor::Closed);
                    reload.run(());
                }
                Err(err) => form_error.set(Some(err.user_message("Failed to save book"))),
            }
            saving.set(false);
        });
    });
    let on_close_editor = Callback::new(move |()| editor.set(Editor::Closed));
    let has_search_terms = move || filters.with(BookFilters::has_search_terms);

    view! {
        <div class="list-page books-page">
            <div class="list-page__header">
                <div>
                    <h1 class="page-title">"Books"</h1>
                    <p class="page-subtitle">
                        {move || {
                            let total = state.with(|s| s.ready().map_or(0, |p| p.meta.total_count));
                            let suffix = if has_search_terms() { "found" } else { "in the library" };
                            format!("{} {suffix}", count_label(u64::from(total), "book"))
                        }}
                    </p>
                </div>
                <Show when=move || can_create_books(session.role())>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            form_error.set(None);
                            editor.set(Editor::Create);
                        }
                    >
                        "Add Book"
                    </button>
                </Show>
            </div>

            <form class="filter-bar" on:submit=on_search>
                <input
                    type="text"
                    placeholder="Search by title..."
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Search by author..."
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Search by genre..."
                    prop:value=move || genre.get()
                    on:input=move |ev| genre.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Search"</button>
                <Show when=has_search_terms>
                    <button class="btn" type="button" on:click=on_clear>"Clear"</button>
                </Show>
            </form>

            {move || match state.get() {
                FetchState::Loading => view! { <p class="loading">"Loading books..."</p> }.into_any(),
                FetchState::Failed(err) => {
                    view! {
                        <RetryPanel message=err.user_message("Failed to load books. Please try again.") on_retry=reload/>
                    }
                        .into_any()
                }
                FetchState::Ready(page) if page.items.is_empty() => {
                    view! {
                        <div class="empty-state">
                            <h3>"No books found"</h3>
                            <p>
                                {if has_search_terms() {
                                    "Try adjusting your search filters."
                                } else {
                                    "There are no books in the library yet."
                                }}
                            </p>
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
                                .map(|book| {
                                    let id = book.id.clone();
                                    view! {
                                        <BookCard
                                            book=book
                                            borrowing=Signal::derive(move || borrowing_id.get().as_deref() == Some(id.as_str()))
                                            on_borrow=on_borrow
                                            on_edit=on_edit
                                            on_delete=on_delete
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
                let title = match editor.get() {
                    Editor::Closed => return None,
                    Editor::Create => "Add Book",
                    Editor::Edit(_) => "Edit Book",
                };
                let initial = match editor.get_untracked() {
                    Editor::Edit(book) => Some(book),
                    _ => None,
                };
                Some(view! {
                    <Modal title=title on_close=on_close_editor>
                        <BookForm
                            initial=initial
                            submitting=saving
                            server_error=form_error
                            on_submit=on_save
                            on_cancel=on_close_editor
                        />
                    </Modal>
                })
            }}

            {move || {
                toast.get().map(|message| view! { <Toast message=message on_close=Callback::new(move |()| toast.set(None))/> })
            }}
        </div>
    }
}
