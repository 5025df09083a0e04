//! Create/edit form for a catalogue entry.

#[cfg(test)]
#[path = "book_form_test.rs"]
mod book_form_test;

use leptos::prelude::*;

use crate::net::types::{Book, CreateBookInput, UpdateBookInput};
use crate::util::validation::{FormErrors, validate_book};

/// Fields of `edited` that differ from `original`. Unchanged fields are
/// left unset so the PATCH body carries only real edits.
#[must_use]
pub fn changed_fields(original: &Book, edited: &CreateBookInput) -> UpdateBookInput {
    fn diff(old: &str, new: &str) -> Option<String> {
        (old != new.trim()).then(|| new.trim().to_owned())
    }
    UpdateBookInput {
        title: diff(&original.title, &edited.title),
        author: diff(&original.author, &edited.author),
        genre: diff(&original.genre, &edited.genre),
        isbn: diff(&original.isbn, &edited.isbn),
        total_copies: (original.total_copies != edited.total_copies).then_some(edited.total_copies),
    }
}

/// Unparseable or negative input counts as zero copies.
#[must_use]
pub fn parse_copies(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
pub fn BookForm(
    initial: Option<Book>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] server_error: Signal<Option<String>>,
    on_submit: Callback<CreateBookInput>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = initial.is_some();
    let seed = initial.unwrap_or_else(|| Book {
        id: String::new(),
        title: String::new(),
        author: String::new(),
        genre: String::new(),
        isbn: String::new(),
        total_copies: 1,
        available_copies: 0,
        borrowed_by_current_user: None,
    });
    let title = RwSignal::new(seed.title);
    let author = RwSignal::new(seed.author);
    let genre = RwSignal::new(seed.genre);
    let isbn = RwSignal::new(seed.isbn);
    let copies = RwSignal::new(seed.total_copies.to_string());
    let errors = RwSignal::new(FormErrors::default());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let input = CreateBookInput {
            title: title.get_untracked().trim().to_owned(),
            author: author.get_untracked().trim().to_owned(),
            genre: genre.get_untracked().trim().to_owned(),
            isbn: isbn.get_untracked().trim().to_owned(),
            total_copies: parse_copies(&copies.get_untracked()),
        };
        let found = validate_book(&input);
        let valid = found.is_empty();
        errors.set(found);
        if valid {
            on_submit.run(input);
        }
    };

    let field = move |name: &'static str| move || errors.with(|e| e.get(name)).unwrap_or_default();

    view! {
        <form class="form" on:submit=on_form_submit>
            <Show when=move || server_error.get().is_some()>
                <p class="form__error" role="alert">{move || server_error.get().unwrap_or_default()}</p>
            </Show>
            <label class="form__field">
                <span>"Title"</span>
                <input type="text" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
                <small class="form__field-error">{field("title")}</small>
            </label>
            <label class="form__field">
                <span>"Author"</span>
                <input type="text" prop:value=move || author.get() on:input=move |ev| author.set(event_target_value(&ev))/>
                <small class="form__field-error">{field("author")}</small>
            </label>
            <label class="form__field">
                <span>"Genre"</span>
                <input type="text" prop:value=move || genre.get() on:input=move |ev| genre.set(event_target_value(&ev))/>
                <small class="form__field-error">{field("genre")}</small>
            </label>
            <label class="form__field">
                <span>"ISBN"</span>
                <input type="text" prop:value=move || isbn.get() on:input=move |ev| isbn.set(event_target_value(&ev))/>
                <small class="form__field-error">{field("isbn")}</small>
            </label>
            <label class="form__field">
                <span>"Total Copies"</span>
                <input
                    type="number"
                    min="1"
                    prop:value=move || copies.get()
                    on:input=move |ev| copies.set(event_target_value(&ev))
                />
                <small class="form__field-error">{field("total_copies")}</small>
            </label>
            <div class="form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || match (submitting.get(), editing) {
                        (true, _) => "Saving...",
                        (false, true) => "Update Book",
                        (false, false) => "Add Book",
                    }}
                </button>
                <button class="btn" type="button" disabled=move || submitting.get() on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
