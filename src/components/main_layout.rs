//! Root layout: navigation bar around the routed page, which renders
//! through the authentication gate.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppContext;
use crate::components::protected_page::ProtectedPage;
use crate::net::types::User;
use crate::pages::not_found::NotFoundPage;
use crate::routes::Page;

#[component]
pub fn MainLayout() -> impl IntoView {
    let session = expect_context::<AppContext>().session();

    let account = move || match session.get().user {
        User::Ready(profile) => view! {
            <A href=Page::Profile.path() attr:class="nav-account">
                <img class="nav-account__avatar" src=profile.avatar.clone() alt=""/>
                <span>{profile.username.clone()}</span>
            </A>
        }
        .into_any(),
        User::NotOk { loading: true, .. } => view! { <span class="nav-account nav-account--pending">"..."</span> }.into_any(),
        User::NotOk { loading: false, .. } => view! {
            <A href=Page::SignIn.path() attr:class="nav-account">"Sign in"</A>
        }
        .into_any(),
    };

    view! {
        <div class="layout">
            <nav class="nav">
                <A href=Page::Home.path() attr:class="nav__brand">"Auction House"</A>
                <A href=Page::Explore.path()>"Explore"</A>
                <A href=Page::AuctionItems.path()>"Auction items"</A>
                <A href=Page::Settings.path()>"Settings"</A>
                <div class="nav__spacer"></div>
                {account}
            </nav>
            <main class="layout__main">
                <ErrorBoundary fallback=|_errors| view! { <NotFoundPage/> }>
                    <ProtectedPage/>
                </ErrorBoundary>
            </main>
        </div>
    }
}
