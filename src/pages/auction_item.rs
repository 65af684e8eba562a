//! Auction item detail, addressed by the `:id` route parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn AuctionItemPage() -> impl IntoView {
    let params = use_params_map();
    let item_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <section class="auction-item">
            <h1>"Auction item"</h1>
            <p class="auction-item__id">"Item #" {item_id}</p>
        </section>
    }
}
