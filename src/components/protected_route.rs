//! Authenticated layout wrapping every protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the parent route of `/dashboard`, `/books`, `/borrowings` and
//! `/invitations`. The redirect effect subscribes to the session, so a
//! logout from anywhere (header button or a 401 seen by the gateway) sends
//! the user to `/login` without further navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::nav_bar::NavBar;
use crate::state::session::{Session, SessionState};
use crate::util::guard::GuardDecision;

/// Navigate whenever `decide` asks for a redirect. Re-runs on every
/// session change. History is replaced so Back does not re-enter the
/// rejected view.
pub fn install_guard_redirect<F>(session: Session, decide: fn(&SessionState) -> GuardDecision, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decide(&session.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let session = expect_context::<Session>();
    install_guard_redirect(session, crate::util::guard::evaluate, use_navigate());

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <p class="guard-pending">"Redirecting to login..."</p> }
        >
            <div class="app-layout">
                <Header/>
                <div class="app-layout__body">
                    <NavBar/>
                    <main class="app-layout__main">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}
