//! Inline failure state with an explicit retry action.

use leptos::prelude::*;

#[component]
pub fn RetryPanel(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="retry-panel" role="alert">
            <p class="retry-panel__message">{message}</p>
            <button class="btn retry-panel__button" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
