//! Side navigation for authenticated routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::capabilities::can_manage_invitations;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<Session>();
    let borrowings_label = move || if session.role() == Some(Role::Librarian) { "Borrowings" } else { "My Borrowings" };

    view! {
        <nav class="nav-bar">
            <A href="/dashboard">"Dashboard"</A>
            <A href="/books">"Books"</A>
            <A href="/borrowings">{borrowings_label}</A>
            <Show when=move || can_manage_invitations(session.role())>
                <A href="/invitations">"Invitations"</A>
            </Show>
        </nav>
    }
}
