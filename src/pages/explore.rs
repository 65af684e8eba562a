use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::Page;

#[component]
pub fn ExplorePage() -> impl IntoView {
    view! {
        <section class="explore">
            <h1>"Explore"</h1>
            <A href=Page::AuctionItems.path()>"Browse auction items"</A>
        </section>
    }
}
