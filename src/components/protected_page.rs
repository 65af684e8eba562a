//! Authentication gate for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! UI-only guard: it keeps signed-out visitors away from pages that need a
//! user, but the API still validates the bearer token on every request.
//! Which pages are gated comes from [`crate::routes::gate_for_path`].

#[cfg(test)]
#[path = "protected_page_test.rs"]
mod protected_page_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppContext;
use crate::routes::{SIGN_IN, gate_for_path};
use crate::state::session::GateDecision;

/// What the gate puts on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateContent {
    Children,
    Outlet,
    Nothing,
}

fn gate_content(decision: GateDecision, has_children: bool) -> GateContent {
    match decision {
        GateDecision::Render if has_children => GateContent::Children,
        GateDecision::Render => GateContent::Outlet,
        GateDecision::Wait | GateDecision::Redirect => GateContent::Nothing,
    }
}

/// Gates the current location: renders `children` (or the nested route
/// outlet when none are given) when the page is public or a user is
/// resolved, nothing while the startup fetch is pending, and redirects to
/// sign-in when a gated page has no user.
#[component]
pub fn ProtectedPage(#[prop(optional)] children: Option<ChildrenFn>) -> impl IntoView {
    let session = expect_context::<AppContext>().session();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let decision = move || pathname.with(|path| session.with(|s| gate_for_path(path, s)));

    Effect::new(move || {
        if decision() == GateDecision::Redirect {
            navigate(SIGN_IN, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let children = StoredValue::new(children);
    move || match gate_content(decision(), children.with_value(Option::is_some)) {
        GateContent::Children => children.get_value().map(|children| children()),
        GateContent::Outlet => Some(view! { <Outlet/> }.into_any()),
        GateContent::Nothing => None,
    }
}
