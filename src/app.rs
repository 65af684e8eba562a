//! Root application component with routing and the shared context.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::main_layout::MainLayout;
use crate::config::ClientConfig;
use crate::net::api::AppApi;
use crate::net::transport::BrowserTransport;
use crate::net::types::User;
use crate::pages::{
    auction_item::AuctionItemPage, auction_items::AuctionItemsPage, explore::ExplorePage, home::HomePage,
    not_found::NotFoundPage, profile::ProfilePage, settings::SettingsPage, sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::state::session::SessionState;
use crate::util::storage::LocalStorageTokenStore;

/// Application-wide context: the API client, config and session.
///
/// Pages read the session through [`AppContext::session`]. Writes go through
/// [`AppContext::set_user`] (sign-in, sign-up, settings) or
/// [`AppContext::resolve_startup_user`] (mount-time bootstrap).
#[derive(Clone)]
pub struct AppContext {
    pub api: Arc<AppApi>,
    pub config: Arc<ClientConfig>,
    session: RwSignal<SessionState>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let tokens = LocalStorageTokenStore::new(config.token_key.clone());
        let api = AppApi::new(config.api_base_url.clone(), BrowserTransport, tokens);
        Self { api: Arc::new(api), config: Arc::new(config), session: RwSignal::new(SessionState::default()) }
    }

    pub fn session(&self) -> ReadSignal<SessionState> {
        self.session.read_only()
    }

    pub fn set_user(&self, user: User) {
        self.session.update(|s| s.user = user);
    }

    /// Apply the mount-time user, unless a sign-in already resolved the session.
    pub fn resolve_startup_user(&self, user: User) {
        if self.session.with_untracked(|s| s.user.is_loading()) {
            self.set_user(user);
        } else {
            log::debug!("session resolved before startup fetch returned; keeping it");
        }
    }
}

fn load_config() -> ClientConfig {
    ClientConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("{e}; using default client config");
        ClientConfig::default()
    })
}

/// Root application component.
///
/// Provides the [`AppContext`], resolves the user once at mount, and sets up
/// client-side routing. Access control is applied by [`MainLayout`] from
/// [`crate::routes::Page::requires_auth`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::new(load_config());
    provide_context(ctx.clone());

    #[cfg(feature = "csr")]
    {
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            let user = crate::state::session::bootstrap_session(&*ctx.api, ctx.config.startup_deposit).await;
            ctx.resolve_startup_user(user);
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = ctx;

    view! {
        <Title text="Auction House"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <ParentRoute path=StaticSegment("") view=MainLayout>
                    <ParentRoute path=StaticSegment("home") view=Outlet>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("explore") view=Outlet>
                        <Route path=StaticSegment("") view=ExplorePage/>
                        <Route path=StaticSegment("auction-items") view=AuctionItemsPage/>
                        <Route path=(StaticSegment("auction-items"), ParamSegment("id")) view=AuctionItemPage/>
                    </ParentRoute>
                    <Route path=StaticSegment("sign-in") view=SignInPage/>
                    <Route path=StaticSegment("sign-up") view=SignUpPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
