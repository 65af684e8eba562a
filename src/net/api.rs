//! REST API client for the auction backend.
//!
//! Every operation is a single request/response round trip through the
//! configured [`Transport`]: no retry, no timeout, no backoff.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are returned before any request is sent. Non-success
//! statuses become [`ApiError::Status`] via [`json_or_error`], so callers
//! always get a `Result` to handle instead of a half-parsed value.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, BrowserTransport, Method, RequestBody, Transport};
use super::types::{AvatarFile, DepositRequest, Profile, SignInRequest, SignInResponse, SignUpData};
use crate::util::storage::{LocalStorageTokenStore, TokenStore, bearer_header};

/// Multipart field name the avatar endpoint expects.
pub const AVATAR_FIELD: &str = "avatarFile";

/// The client used by the running application.
pub type AppApi = ApiClient<BrowserTransport, LocalStorageTokenStore>;

pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    tokens: S,
}

fn whoami_endpoint(base: &str) -> String {
    format!("{base}/auth/whoami")
}

fn signup_endpoint(base: &str) -> String {
    format!("{base}/auth/signup")
}

fn signin_endpoint(base: &str) -> String {
    format!("{base}/auth/signin")
}

fn deposit_endpoint(base: &str) -> String {
    format!("{base}/user/deposit")
}

fn avatar_endpoint(base: &str, user_id: &str) -> String {
    format!("{base}/user/{user_id}/avatar")
}

/// Check the status and parse the body as JSON.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for a non-2xx status and [`ApiError::Decode`]
/// if a success body does not parse as `T`.
pub fn json_or_error<T: DeserializeOwned>(response: ApiResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        log::warn!("api request failed: status {}", response.status);
        return Err(ApiError::Status { status: response.status, body: response.body });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a JSON value the way a boolean-ish API response is meant.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

fn json_body<B: serde::Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_value(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Request(e.to_string()))
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, tokens: S) -> Self {
        Self { base_url: base_url.into(), transport, tokens }
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn authorization(&self) -> Option<String> {
        Some(bearer_header(self.tokens.load().as_deref()))
    }

    async fn send(&self, method: Method, url: String, authorization: Option<String>, body: RequestBody) -> Result<ApiResponse, ApiError> {
        log::debug!("{method:?} {url}");
        self.transport
            .send(ApiRequest { method, url, authorization, body })
            .await
    }

    /// Fetch the profile of the user owning the stored token via `GET /auth/whoami`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the token.
    pub async fn get_user(&self) -> Result<Profile, ApiError> {
        let response = self
            .send(Method::Get, whoami_endpoint(&self.base_url), self.authorization(), RequestBody::Empty)
            .await?;
        json_or_error(response)
    }

    /// Register a new account via `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the registration.
    pub async fn sign_up(&self, data: &SignUpData) -> Result<Profile, ApiError> {
        let response = self
            .send(Method::Post, signup_endpoint(&self.base_url), None, json_body(data)?)
            .await?;
        json_or_error(response)
    }

    /// Exchange credentials for a bearer token via `POST /auth/signin`.
    ///
    /// The token is returned, not stored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingCredentials`] without sending anything when
    /// either value is empty, otherwise any request or status error.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, ApiError> {
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::MissingCredentials);
        }
        let body = json_body(&SignInRequest { email, password })?;
        let response = self
            .send(Method::Post, signin_endpoint(&self.base_url), None, body)
            .await?;
        json_or_error(response)
    }

    /// Credit the current user's balance via `POST /user/deposit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub async fn add_deposit(&self, amount: u64) -> Result<Profile, ApiError> {
        let body = json_body(&DepositRequest { amount })?;
        let response = self
            .send(Method::Post, deposit_endpoint(&self.base_url), self.authorization(), body)
            .await?;
        json_or_error(response)
    }

    /// Replace the current user's avatar via `PATCH /user/{id}/avatar`.
    ///
    /// The avatar endpoint is addressed by user id, which is resolved by
    /// fetching the current profile first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingAvatar`] without sending anything when no
    /// file is given, otherwise any error from either request.
    pub async fn update_profile_avatar(&self, avatar: Option<AvatarFile>) -> Result<bool, ApiError> {
        let Some(file) = avatar else {
            return Err(ApiError::MissingAvatar);
        };

        let profile = self.get_user().await?;

        let body = RequestBody::Multipart { field: AVATAR_FIELD.to_owned(), file };
        let response = self
            .send(Method::Patch, avatar_endpoint(&self.base_url, &profile.id), self.authorization(), body)
            .await?;
        let value: serde_json::Value = json_or_error(response)?;
        Ok(is_truthy(&value))
    }
}
