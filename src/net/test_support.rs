//! Test doubles for driving [`ApiClient`](super::api::ApiClient) natively.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::util::storage::TokenStore;

// =========================================================================
// MockTransport
// =========================================================================

/// Replays queued responses in order and records every request sent.
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn new(responses: Vec<Result<ApiResponse, ApiError>>) -> Self {
        Self { responses: Mutex::new(responses.into()), requests: Mutex::new(Vec::new()) }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no mock response queued".to_owned())))
    }
}

// =========================================================================
// MemoryTokenStore
// =========================================================================

#[derive(Default)]
pub(crate) struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub(crate) fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_owned());
    }
}

// =========================================================================
// Helpers
// =========================================================================

pub(crate) const BASE_URL: &str = "http://api.test";

pub(crate) type TestApi = ApiClient<MockTransport, MemoryTokenStore>;

pub(crate) fn json_response(status: u16, body: &serde_json::Value) -> Result<ApiResponse, ApiError> {
    Ok(ApiResponse { status, body: body.to_string() })
}

pub(crate) fn profile_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "avatar": "https://img.test/avatar.png",
        "firstname": "Tania",
        "lastname": "Andrew",
        "username": "tandrew",
        "email": "tania@example.com",
        "password": "$2b$hash"
    })
}

pub(crate) fn test_api(token: Option<&str>, responses: Vec<Result<ApiResponse, ApiError>>) -> TestApi {
    let tokens = token.map_or_else(MemoryTokenStore::default, MemoryTokenStore::with_token);
    ApiClient::new(BASE_URL, MockTransport::new(responses), tokens)
}
