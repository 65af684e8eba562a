//! Authenticated landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppContext;
use crate::net::types::Profile;
use crate::routes::Page;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<AppContext>().session();
    let name = move || session.with(|s| s.profile().map(Profile::display_name).unwrap_or_default());

    view! {
        <section class="home">
            <h1>"Welcome back, " {name}</h1>
            <ul class="home__links">
                <li><A href=Page::Profile.path()>"Your profile"</A></li>
                <li><A href=Page::Settings.path()>"Account settings"</A></li>
                <li><A href=Page::AuctionItems.path()>"Browse auction items"</A></li>
            </ul>
        </section>
    }
}
