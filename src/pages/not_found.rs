//! Fallback for unmatched paths and render errors.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::Page;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <A href=Page::Explore.path()>"Back to exploring"</A>
        </div>
    }
}
