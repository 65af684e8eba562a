use super::*;
use leptos::reactive::owner::Owner;
use crate::net::types::Profile;
use crate::state::session::GateDecision;

fn ready(id: &str) -> User {
    User::Ready(Profile { id: id.to_owned(), ..Profile::default() })
}

fn with_context(test: impl FnOnce(&AppContext)) {
    let owner = Owner::new();
    owner.with(|| test(&AppContext::new(ClientConfig::default())));
}

#[test]
fn context_starts_loading() {
    with_context(|ctx| {
        assert_eq!(ctx.session().get_untracked().gate(), GateDecision::Wait);
    });
}

#[test]
fn startup_user_applies_while_loading() {
    with_context(|ctx| {
        ctx.resolve_startup_user(ready("u-1"));
        assert_eq!(ctx.session().get_untracked().gate(), GateDecision::Render);
    });
}

#[test]
fn startup_failure_applies_while_loading() {
    with_context(|ctx| {
        ctx.resolve_startup_user(User::failed("request failed with status 401"));
        assert_eq!(ctx.session().get_untracked().gate(), GateDecision::Redirect);
    });
}

#[test]
fn late_startup_failure_keeps_signed_in_user() {
    with_context(|ctx| {
        ctx.set_user(ready("u-1"));
        ctx.resolve_startup_user(User::failed("request failed with status 401"));

        let session = ctx.session().get_untracked();
        assert_eq!(session.gate(), GateDecision::Render);
        assert_eq!(session.profile().map(|p| p.id.as_str()), Some("u-1"));
    });
}

#[test]
fn set_user_replaces_resolved_user() {
    with_context(|ctx| {
        ctx.set_user(ready("u-1"));
        ctx.set_user(ready("u-2"));
        assert_eq!(ctx.session().get_untracked().profile().map(|p| p.id.as_str()), Some("u-2"));
    });
}
