//! Card for one librarian invitation.

use leptos::prelude::*;

use crate::net::types::{Invitation, InvitationStatus};
use crate::util::format::{display_date, display_date_time};

fn status_modifier(status: InvitationStatus) -> &'static str {
    match status {
        InvitationStatus::Pending => "badge--warn",
        InvitationStatus::Accepted => "badge--ok",
        InvitationStatus::Expired => "badge--muted",
    }
}

/// Only pending invitations can be withdrawn.
#[component]
pub fn InvitationCard(
    invitation: Invitation,
    #[prop(into)] deleting: Signal<bool>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let expired = invitation.status == InvitationStatus::Expired;
    let accepted_at = (invitation.status == InvitationStatus::Accepted)
        .then(|| invitation.accepted_at.clone())
        .flatten();
    let deletable = invitation.status == InvitationStatus::Pending;
    let id = invitation.id.clone();
    let aria = format!("Delete invitation for {}", invitation.email);

    view! {
        <div class="invitation-card">
            <div class="invitation-card__head">
                <div>
                    <h3 class="invitation-card__email">{invitation.email.clone()}</h3>
                    <p class="invitation-card__role">{invitation.role.clone()}</p>
                </div>
                <span class=format!("badge {}", status_modifier(invitation.status))>{invitation.status.as_str()}</span>
            </div>
            <dl class="invitation-card__facts">
                <dt>"Created"</dt>
                <dd>{display_date(&invitation.created_at).to_owned()}</dd>
                <dt>"Expires"</dt>
                <dd class:text-danger=expired>{display_date_time(&invitation.expires_at)}</dd>
                {accepted_at.map(|at| view! {
                    <dt>"Accepted"</dt>
                    <dd>{display_date_time(&at)}</dd>
                })}
            </dl>
            {on_delete.filter(|_| deletable).map(|on_delete| view! {
                <button
                    class="btn btn--danger invitation-card__delete"
                    aria-label=aria
                    disabled=move || deleting.get()
                    on:click=move |_| on_delete.run(id.clone())
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete Invitation" }}
                </button>
            })}
        </div>
    }
}
