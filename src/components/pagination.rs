//! Previous/next pager for paginated lists.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::net::envelope::PaginationMeta;

/// Target page for "previous", if there is one.
#[must_use]
pub fn previous_page(meta: &PaginationMeta) -> Option<u32> {
    (meta.current_page > 1).then(|| meta.current_page - 1)
}

/// Target page for "next", if there is one.
#[must_use]
pub fn next_page(meta: &PaginationMeta) -> Option<u32> {
    (meta.current_page < meta.total_pages).then(|| meta.current_page + 1)
}

/// Renders nothing for single-page results.
#[component]
pub fn Pagination(meta: PaginationMeta, on_page_change: Callback<u32>) -> impl IntoView {
    let previous = previous_page(&meta);
    let next = next_page(&meta);

    meta.has_multiple_pages().then(|| {
        view! {
            <div class="pagination">
                <button
                    class="btn pagination__prev"
                    disabled=previous.is_none()
                    on:click=move |_| {
                        if let Some(page) = previous {
                            on_page_change.run(page);
                        }
                    }
                >
                    "Previous"
                </button>
                <span class="pagination__status">
                    {format!("Page {} of {}", meta.current_page, meta.total_pages)}
                </span>
                <button
                    class="btn pagination__next"
                    disabled=next.is_none()
                    on:click=move |_| {
                        if let Some(page) = next {
                            on_page_change.run(page);
                        }
                    }
                >
                    "Next"
                </button>
            </div>
        }
    })
}
