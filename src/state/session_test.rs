use super::*;
use crate::net::test_support::{json_response, profile_json, test_api};
use crate::net::transport::{Method, RequestBody};
use futures::executor::block_on;

// =============================================================
// Gate decisions
// =============================================================

#[test]
fn gate_waits_while_loading() {
    assert_eq!(SessionState::default().gate(), GateDecision::Wait);
}

#[test]
fn gate_redirects_when_user_failed() {
    let state = SessionState { user: User::failed("request failed with status 401") };
    assert_eq!(state.gate(), GateDecision::Redirect);
    assert!(state.profile().is_none());
}

#[test]
fn gate_renders_for_resolved_user() {
    let state = SessionState { user: User::Ready(Profile { id: "u-1".to_owned(), ..Profile::default() }) };
    assert_eq!(state.gate(), GateDecision::Render);
    assert_eq!(state.profile().map(|p| p.id.as_str()), Some("u-1"));
}

// =============================================================
// bootstrap_session
// =============================================================

#[test]
fn bootstrap_without_token_ends_unauthenticated() {
    let api = test_api(None, vec![json_response(401, &serde_json::json!({ "message": "Unauthorized" }))]);
    let user = block_on(bootstrap_session(&api, Some(500)));

    assert_eq!(SessionState { user: user.clone() }.gate(), GateDecision::Redirect);
    assert_eq!(user.error(), Some("request failed with status 401"));
    // No deposit for an unresolved user.
    assert_eq!(api.transport().requests().len(), 1);
}

#[test]
fn bootstrap_without_deposit_makes_one_request() {
    let api = test_api(Some("tok"), vec![json_response(200, &profile_json("u-1"))]);
    let user = block_on(bootstrap_session(&api, None));
    assert_eq!(user.profile().map(|p| p.id.as_str()), Some("u-1"));
    assert_eq!(api.transport().requests().len(), 1);
}

#[test]
fn bootstrap_awaits_deposit_and_uses_its_profile() {
    let mut after_deposit = profile_json("u-1");
    after_deposit["username"] = serde_json::json!("richer");
    let api = test_api(
        Some("tok"),
        vec![json_response(200, &profile_json("u-1")), json_response(200, &after_deposit)],
    );
    let user = block_on(bootstrap_session(&api, Some(500)));

    assert_eq!(user.profile().map(|p| p.username.as_str()), Some("richer"));
    let requests = api.transport().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].url, "http://api.test/user/deposit");
    assert_eq!(requests[1].body, RequestBody::Json(serde_json::json!({ "amount": 500 })));
}

#[test]
fn bootstrap_keeps_user_when_deposit_fails() {
    let api = test_api(
        Some("tok"),
        vec![json_response(200, &profile_json("u-1")), json_response(500, &serde_json::json!({}))],
    );
    let user = block_on(bootstrap_session(&api, Some(500)));
    assert_eq!(user.profile().map(|p| p.username.as_str()), Some("tandrew"));
}

// =============================================================
// establish_session / register
// =============================================================

#[test]
fn establish_session_stores_token_before_fetching_user() {
    let api = test_api(
        None,
        vec![json_response(200, &serde_json::json!({ "token": "tok-new" })), json_response(200, &profile_json("u-3"))],
    );
    let profile = block_on(establish_session(&api, "tania@example.com", "hunter22")).unwrap();

    assert_eq!(profile.id, "u-3");
    assert_eq!(api.tokens().load().as_deref(), Some("tok-new"));
    let requests = api.transport().requests();
    assert_eq!(requests[1].method, Method::Get);
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer tok-new"));
}

#[test]
fn establish_session_rejected_sign_in_stores_nothing() {
    let api = test_api(None, vec![json_response(401, &serde_json::json!({}))]);
    let err = block_on(establish_session(&api, "a@b.com", "wrong")).unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(api.tokens().load(), None);
    assert_eq!(api.transport().requests().len(), 1);
}

#[test]
fn establish_session_missing_credentials_sends_nothing() {
    let api = test_api(None, vec![]);
    let err = block_on(establish_session(&api, "", "")).unwrap_err();
    assert_eq!(err, ApiError::MissingCredentials);
    assert!(api.transport().requests().is_empty());
}

#[test]
fn register_signs_up_then_signs_in_with_same_credentials() {
    let api = test_api(
        None,
        vec![
            json_response(201, &profile_json("u-4")),
            json_response(200, &serde_json::json!({ "token": "tok-4" })),
            json_response(200, &profile_json("u-4")),
        ],
    );
    let data = SignUpData {
        email: "tania@example.com".to_owned(),
        password: "hunter22".to_owned(),
        ..SignUpData::default()
    };
    let profile = block_on(register(&api, &data)).unwrap();

    assert_eq!(profile.id, "u-4");
    let requests = api.transport().requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].url, "http://api.test/auth/signup");
    assert_eq!(
        requests[1].body,
        RequestBody::Json(serde_json::json!({ "email": "tania@example.com", "password": "hunter22" }))
    );
}
