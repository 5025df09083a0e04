//! Member self-registration.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::protected_route::install_guard_redirect;
use crate::net::api::ApiClient;
use crate::net::types::SignupCredentials;
use crate::state::session::Session;
use crate::util::fetch::{ViewScope, spawn_task};
use crate::util::guard::evaluate_public;
use crate::util::validation::{FormErrors, validate_signup};

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = StoredValue::new(expect_context::<ApiClient>());
    install_guard_redirect(session, evaluate_public, use_navigate());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let scope = ViewScope::mounted();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = SignupCredentials {
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            password_confirmation: confirmation.get_untracked(),
            name: name.get_untracked().trim().to_owned(),
        };
        let found = validate_signup(&credentials);
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
            let result = api.signup(&credentials).await;
            if scope.is_open() {
                busy.set(false);
                if let Err(err) = &result {
                    message.set(Some(err.user_message("Signup failed. Please try again.")));
                }
            }
            if let Ok(user) = result {
                session.set_user(Some(user));
            }
        });
    };

    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field)).unwrap_or_default();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Library"</h1>
                <p class="auth-card__subtitle">"Create your account"</p>
                <Show when=move || message.get().is_some()>
                    <p class="form__error" role="alert">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        <span>"Full Name"</span>
                        <input type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
                        <small class="form__field-error">{field_error("name")}</small>
                    </label>
                    <label class="form__field">
                        <span>"Email"</span>
                        <input type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev))/>
                        <small class="form__field-error">{field_error("email")}</small>
                    </label>
                    <label class="form__field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <small class="form__field-error">{field_error("password")}</small>
                    </label>
                    <label class="form__field">
                        <span>"Confirm Password"</span>
                        <input
                            type="password"
                            prop:value=move || confirmation.get()
                            on:input=move |ev| confirmation.set(event_target_value(&ev))
                        />
                        <small class="form__field-error">{field_error("password_confirmation")}</small>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Log in"</A>
                </p>
            </div>
        </div>
    }
}
