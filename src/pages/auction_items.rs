//! Auction item listing with a jump-to-item form.

#[cfg(test)]
#[path = "auction_items_test.rs"]
mod auction_items_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::auction_item_path;

fn validate_item_id_input(raw: &str) -> Result<String, &'static str> {
    let id = raw.trim();
    if id.is_empty() {
        return Err("Enter an item number.");
    }
    if id.contains(['/', '?', '#']) {
        return Err("Item numbers cannot contain '/', '?' or '#'.");
    }
    Ok(id.to_owned())
}

#[component]
pub fn AuctionItemsPage() -> impl IntoView {
    let item_id = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_open = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_item_id_input(&item_id.get()) {
            Ok(id) => {
                info.set(String::new());
                navigate(&auction_item_path(&id), NavigateOptions::default());
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <section class="auction-items">
            <h1>"Auction items"</h1>
            <form class="auction-items__open" on:submit=on_open>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Item number"
                    prop:value=move || item_id.get()
                    on:input=move |ev| item_id.set(event_target_value(&ev))
                />
                <button class="form-button" type="submit">"Open item"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form-message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
