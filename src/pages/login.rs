//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::protected_route::install_guard_redirect;
use crate::net::api::ApiClient;
use crate::net::types::LoginCredentials;
use crate::state::session::Session;
use crate::util::fetch::{ViewScope, spawn_task};
use crate::util::guard::evaluate_public;
use crate::util::validation::{FormErrors, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = StoredValue::new(expect_context::<ApiClient>());
    // Signing in flips the session, which sends this effect to the dashboard.
    install_guard_redirect(session, evaluate_public, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let scope = ViewScope::mounted();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = LoginCredentials { email: email.get_untracked().trim().to_owned(), password: password.get_untracked() };
        let found = validate_login(&credentials);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        busy.set(true);
        message.set(None);
        let api = api.get_value();
        let scope = scope.clone();
        spawn_task(async move {
            let result = api.login(&credentials).await;
            if scope.is_open() {
                busy.set(false);
                match &result {
                    Err(err) if err.is_unauthorized() => message.set(Some("Invalid email or password".to_owned())),
                    Err(err) => message.set(Some(err.user_message("Login failed. Please try again."))),
                    Ok(_) => {}
                }
            }
            // The session is app-owned; a login that lands after leaving the page still counts.
            if let Ok(user) = result {
                session.set_user(Some(user));
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Library"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <Show when=move || message.get().is_some()>
                    <p class="form__error" role="alert">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <small class="form__field-error">{move || errors.with(|e| e.get("email")).unwrap_or_default()}</small>
                    </label>
                    <label class="form__field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <small class="form__field-error">{move || errors.with(|e| e.get("password")).unwrap_or_default()}</small>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
