//! Dialog shell. Callers decide visibility by mounting it inside `<Show>`.

use leptos::prelude::*;

#[component]
pub fn Modal(#[prop(into)] title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal__header">
                    <h2 class="modal__title">{title}</h2>
                    <button class="modal__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
