//! Top bar with identity badge and logout.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::session::Session;
use crate::util::fetch::{ViewScope, spawn_task};

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = StoredValue::new(expect_context::<ApiClient>());
    let busy = RwSignal::new(false);
    let scope = ViewScope::mounted();

    // Server logout is best-effort; local teardown always runs and the
    // route guard takes care of the redirect.
    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = api.get_value();
        let scope = scope.clone();
        spawn_task(async move {
            if let Err(err) = api.logout().await {
                warn!("logout request failed: {err}");
            }
            if scope.is_open() {
                busy.set(false);
            }
            session.logout();
        });
    };

    view! {
        <header class="app-header">
            <div class="app-header__brand">
                <span class="app-header__logo" aria-hidden="true">"📚"</span>
                <span class="app-header__title">"Library"</span>
            </div>
            <div class="app-header__identity">
                <span class="app-header__avatar">
                    {move || session.user().map(|u| u.initial()).unwrap_or_default()}
                </span>
                <span class="app-header__who">
                    <span class="app-header__name">{move || session.user().map(|u| u.name).unwrap_or_default()}</span>
                    <span class="app-header__role">
                        {move || session.role().map(|r| r.as_str()).unwrap_or_default()}
                    </span>
                </span>
                <button class="btn app-header__logout" on:click=on_logout disabled=move || busy.get()>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
