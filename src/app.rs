//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything shared is built here once and handed down through context:
//! the `Session`, the `ApiClient` (whose gateway holds the session's
//! teardown through the unauthorized hub) and the read-query `RetryPolicy`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::{ClientConfig, DASHBOARD_PATH, LOGIN_PATH};
use crate::net::api::ApiClient;
use crate::net::gateway::Gateway;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    accept_invitation::AcceptInvitationPage, books::BooksPage, borrowings::BorrowingsPage, dashboard::DashboardPage,
    invitations::InvitationsPage, login::LoginPage, signup::SignupPage,
};
use crate::state::session::Session;
use crate::util::token_store::{LocalTokenStore, TokenStore};
use crate::util::unauthorized::{UnauthorizedHandler, UnauthorizedHub};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let tokens: Arc<dyn TokenStore> = Arc::new(LocalTokenStore::default());
    let session = Session::new(Arc::clone(&tokens));

    // Registered before the gateway exists, so no request can 401 into an empty hub.
    let hub = UnauthorizedHub::new();
    hub.register(move || session.on_unauthorized());

    let transport = Arc::new(BrowserTransport::new(config.api_base_url.clone()));
    let gateway = Gateway::new(transport, tokens, Arc::new(hub));
    log::debug!("api client targeting {}", config.api_base_url);

    provide_context(session);
    provide_context(ApiClient::new(gateway));
    provide_context(config.retry);

    view! {
        <Title text="Library"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=(StaticSegment("accept-invitation"), ParamSegment("token")) view=AcceptInvitationPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedRoute>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("books") view=BooksPage/>
                    <Route path=StaticSegment("borrowings") view=BorrowingsPage/>
                    <Route path=StaticSegment("invitations") view=InvitationsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
