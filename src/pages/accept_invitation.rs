//! Invitation acceptance, reached from the emailed `/accept-invitation/:token` link.
//!
//! The invitation is fetched by token first so an expired or already
//! accepted link gets its own screen instead of a form that cannot succeed.
//! Only a client-error lookup marks the link invalid; transport, server and
//! unexpected-data failures keep the link and offer a retry.

#[cfg(test)]
#[path = "accept_invitation_test.rs"]
mod accept_invitation_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::retry_panel::RetryPanel;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{AcceptInvitationInput, Invitation, InvitationStatus};
use crate::state::fetch::FetchState;
use crate::util::fetch::{FetchGeneration, RetryPolicy, ViewScope, run_query, spawn_task};
use crate::util::format::display_date;
use crate::util::validation::{FormErrors, validate_acceptance};

/// What the acceptance page shows for a lookup result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AcceptScreen {
    Loading,
    Invalid,
    /// The lookup failed for a reason other than the link itself.
    Failed(String),
    Expired,
    AlreadyAccepted,
    Created,
    Form(Invitation),
}

/// `created` wins over the lookup so the success screen survives a re-fetch.
#[must_use]
pub fn accept_screen(lookup: &FetchState<Invitation>, created: bool) -> AcceptScreen {
    if created {
        return AcceptScreen::Created;
    }
    match lookup {
        FetchState::Loading => AcceptScreen::Loading,
        FetchState::Failed(err) => lookup_failure(err),
        FetchState::Ready(invitation) => match invitation.status {
            InvitationStatus::Expired => AcceptScreen::Expired,
            InvitationStatus::Accepted => AcceptScreen::AlreadyAccepted,
            InvitationStatus::Pending => AcceptScreen::Form(invitation.clone()),
        },
    }
}

fn lookup_failure(err: &ApiError) -> AcceptScreen {
    match err.status() {
        Some(400..=499) => AcceptScreen::Invalid,
        _ => AcceptScreen::Failed(err.user_message("Failed to load invitation. Please try again.")),
    }
}

#[component]
pub fn AcceptInvitationPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let policy = expect_context::<RetryPolicy>();
    let params = use_params_map();
    let generation = FetchGeneration::new();

    let token = Memo::new(move |_| params.with(|p| p.get("token")).unwrap_or_default());
    let lookup = RwSignal::new(FetchState::<Invitation>::Loading);
    let created = RwSignal::new(false);

    let reload = Callback::new({
        let generation = generation.clone();
        move |current: String| {
            run_query(&generation, policy, lookup, api.get_value(), move |api| {
                let current = current.clone();
                async move { api.get_invitation_by_token(&current).await }
            });
        }
    });

    Effect::new(move || reload.run(token.get()));
    on_cleanup(move || generation.invalidate());

    let on_retry = Callback::new(move |()| reload.run(token.get_untracked()));

    let on_accepted = Callback::new(move |()| created.set(true));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                {move || match accept_screen(&lookup.get(), created.get()) {
                    AcceptScreen::Loading => view! { <p class="muted">"Loading invitation..."</p> }.into_any(),
                    AcceptScreen::Invalid => view! {
                        <Notice
                            title="Invalid Invitation"
                            body="This invitation link is invalid or has been removed."
                        />
                    }
                    .into_any(),
                    AcceptScreen::Failed(message) => view! {
                        <RetryPanel message=message on_retry=on_retry/>
                    }
                    .into_any(),
                    AcceptScreen::Expired => view! {
                        <Notice
                            title="Invitation Expired"
                            body="This invitation has expired. Please ask a librarian to send a new one."
                        />
                    }
                    .into_any(),
                    AcceptScreen::AlreadyAccepted => view! {
                        <Notice
                            title="Already Accepted"
                            body="This invitation has already been used. You can sign in with your account."
                        />
                    }
                    .into_any(),
                    AcceptScreen::Created => view! {
                        <Notice
                            title="Account Created!"
                            body="Your librarian account is ready. Sign in to get started."
                        />
                    }
                    .into_any(),
                    AcceptScreen::Form(invitation) => view! {
                        <AcceptForm invitation=invitation token=token.get_untracked() api=api on_accepted=on_accepted/>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn Notice(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <h1>{title}</h1>
        <p class="auth-card__subtitle">{body}</p>
        <A href="/login">"Go to Login"</A>
    }
}

#[component]
fn AcceptForm(
    invitation: Invitation,
    token: String,
    api: StoredValue<ApiClient>,
    on_accepted: Callback<()>,
) -> impl IntoView {
    let token = StoredValue::new(token);
    let name = RwSignal::new(String::new());
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
        let input = AcceptInvitationInput {
            name: name.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            password_confirmation: confirmation.get_untracked(),
        };
        let found = validate_acceptance(&input);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        busy.set(true);
        message.set(None);
        let api = api.get_value();
        let token = token.get_value();
        let scope = scope.clone();
        spawn_task(async move {
            let Some(result) = scope.finish(api.accept_invitation(&token, &input)).await else {
                return;
            };
            busy.set(false);
            match result {
                Ok(()) => on_accepted.run(()),
                Err(err) => message.set(Some(err.user_message("Failed to accept invitation"))),
            }
        });
    };

    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field)).unwrap_or_default();
    let expires = display_date(&invitation.expires_at).to_owned();

    view! {
        <h1>"Accept Invitation"</h1>
        <p class="auth-card__subtitle">
            "You've been invited as a " {invitation.role.clone()} " with " <strong>{invitation.email.clone()}</strong>
        </p>
        <p class="muted">"Expires " {expires}</p>
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
    }
}
