//! Librarian invitation management: list, send, withdraw.

use leptos::prelude::*;

use crate::components::invitation_card::InvitationCard;
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::retry_panel::RetryPanel;
use crate::components::toast::{Toast, ToastMessage};
use crate::config::LIST_PER_PAGE;
use crate::net::api::ApiClient;
use crate::net::envelope::Page;
use crate::net::types::{Invitation, InvitationFilters};
use crate::state::fetch::FetchState;
use crate::state::session::Session;
use crate::util::capabilities::can_manage_invitations;
use crate::util::fetch::{FetchGeneration, RetryPolicy, ViewScope, run_query, spawn_task};
use crate::util::format::count_label;
use crate::util::validation::validate_invitation_email;

#[component]
pub fn InvitationsPage() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <Show
            when=move || can_manage_invitations(session.role())
            fallback=|| {
                view! {
                    <div class="empty-state">
                        <h3>"Not available"</h3>
                        <p>"Only librarians can manage invitations."</p>
                    </div>
                }
            }
        >
            <InvitationManager/>
        </Show>
    }
}

#[component]
fn InvitationManager() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let policy = expect_context::<RetryPolicy>();
    let generation = FetchGeneration::new();
    let scope = ViewScope::mounted();

    let filters = RwSignal::new(InvitationFilters { page: Some(1), per_page: Some(LIST_PER_PAGE) });
    let state = RwSignal::new(FetchState::<Page<Invitation>>::Loading);
    let deleting_id = RwSignal::new(None::<String>);
    let form_open = RwSignal::new(false);
    let sending = RwSignal::new(false);
    let toast = RwSignal::new(None::<ToastMessage>);

    let reload = Callback::new({
        let generation = generation.clone();
        move |()| {
            let current = filters.get_untracked();
            run_query(&generation, policy, state, api.get_value(), move |api| {
                let current = current.clone();
                async move { api.list_invitations(&current).await }
            });
        }
    });

    Effect::new(move || {
        filters.track();
        reload.run(());
    });
    on_cleanup(move || generation.invalidate());

    let on_page_change = Callback::new(move |page: u32| filters.update(|f| f.page = Some(page)));

    let on_send = Callback::new({
        let scope = scope.clone();
        move |email: String| {
            if sending.get_untracked() {
                return;
            }
            sending.set(true);
            let api = api.get_value();
            let scope = scope.clone();
            spawn_task(async move {
                let Some(result) = scope.finish(api.create_invitation(&email)).await else {
                    return;
                };
                match result {
                    Ok(_) => {
                        form_open.set(false);
                        toast.set(Some(ToastMessage::success("Invitation sent successfully")));
                        reload.run(());
                    }
                    Err(err) => toast.set(Some(ToastMessage::error(err.user_message("Failed to send invitation")))),
                }
                sending.set(false);
            });
        }
    });

    let on_delete = Callback::new(move |invitation_id: String| {
        if deleting_id.get_untracked().is_some() {
            return;
        }
        deleting_id.set(Some(invitation_id.clone()));
        let api = api.get_value();
        let scope = scope.clone();
        spawn_task(async move {
            let Some(result) = scope.finish(api.delete_invitation(&invitation_id)).await else {
                return;
            };
            match result {
                Ok(()) => {
                    toast.set(Some(ToastMessage::success("Invitation deleted successfully")));
                    reload.run(());
                }
                Err(err) => toast.set(Some(ToastMessage::error(err.user_message("Failed to delete invitation")))),
            }
            deleting_id.set(None);
        });
    });
    let on_close_form = Callback::new(move |()| form_open.set(false));

    view! {
        <div class="list-page invitations-page">
            <div class="list-page__header">
                <div>
                    <h1 class="page-title">"Invitations"</h1>
                    <p class="page-subtitle">
                        {move || {
                            let total = state.with(|s| s.ready().map_or(0, |p| p.meta.total_count));
                            count_label(u64::from(total), "invitation")
                        }}
                    </p>
                </div>
                <button class="btn btn--primary" on:click=move |_| form_open.set(true)>
                    "Send Invitation"
                </button>
            </div>

            {move || match state.get() {
                FetchState::Loading => view! { <p class="loading">"Loading invitations..."</p> }.into_any(),
                FetchState::Failed(err) => {
                    view! {
                        <RetryPanel
                            message=err.user_message("Failed to load invitations. Please try again.")
                            on_retry=reload
                        />
                    }
                        .into_any()
                }
                FetchState::Ready(page) if page.items.is_empty() => {
                    view! {
                        <div class="empty-state">
                            <h3>"No invitations yet"</h3>
                            <p>"Send an invitation to invite a librarian to join the system."</p>
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
                                .map(|invitation| {
                                    let id = invitation.id.clone();
                                    view! {
                                        <InvitationCard
                                            invitation=invitation
                                            deleting=Signal::derive(move || deleting_id.get().as_deref() == Some(id.as_str()))
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

            <Show when=move || form_open.get()>
                <Modal title="Send Invitation" on_close=on_close_form>
                    <InvitationForm submitting=sending on_submit=on_send on_cancel=on_close_form/>
                </Modal>
            </Show>

            {move || {
                toast.get().map(|message| view! { <Toast message=message on_close=Callback::new(move |()| toast.set(None))/> })
            }}
        </div>
    }
}

#[component]
fn InvitationForm(
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = email.get_untracked().trim().to_owned();
        let errors = validate_invitation_email(&value);
        error.set(errors.get("email"));
        if errors.is_empty() {
            on_submit.run(value);
        }
    };

    view! {
        <form class="form" on:submit=on_form_submit>
            <label class="form__field">
                <span>"Email Address"</span>
                <input
                    type="email"
                    placeholder="librarian@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <small class="form__field-error">{move || error.get().unwrap_or_default()}</small>
                <small class="form__hint">"The librarian will receive an invitation email to join the system."</small>
            </label>
            <div class="form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Send Invitation" }}
                </button>
                <button class="btn" type="button" disabled=move || submitting.get() on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
