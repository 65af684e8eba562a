//! Wire DTOs for the auction REST API and the client-side user model.
//!
//! DESIGN
//! ======
//! `Profile` mirrors the server's user JSON. `User` is the client-side view
//! of that profile: either a resolved profile or a loading/failure
//! placeholder, so consumers have to handle both shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A user profile as returned by `/auth/whoami`, `/auth/signup` and `/user/deposit`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Server-assigned identifier, normalized to a string.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,
    #[serde(default, rename = "firstname")]
    pub first_name: String,
    #[serde(default, rename = "lastname")]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Password field as echoed by the server (typically a hash).
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl Profile {
    /// First and last name joined, falling back to the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }
}

/// The current user: a resolved profile or a not-ok placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum User {
    /// Profile fetched successfully.
    Ready(Profile),
    /// Still loading, or the fetch failed with `error`.
    NotOk { loading: bool, error: Option<String> },
}

impl User {
    /// Placeholder used before the startup fetch resolves.
    pub fn loading() -> Self {
        Self::NotOk { loading: true, error: None }
    }

    /// Placeholder recording why the user could not be resolved.
    pub fn failed(error: impl ToString) -> Self {
        Self::NotOk { loading: false, error: Some(error.to_string()) }
    }

    pub fn is_not_ok(&self) -> bool {
        match self {
            Self::Ready(_) => false,
            Self::NotOk { .. } => true,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Self::Ready(_) => false,
            Self::NotOk { loading, .. } => *loading,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Ready(profile) => Some(profile),
            Self::NotOk { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::NotOk { error, .. } => error.as_deref(),
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::loading()
    }
}

impl From<Profile> for User {
    fn from(profile: Profile) -> Self {
        Self::Ready(profile)
    }
}

/// Registration body for `POST /auth/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignUpData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of `POST /auth/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DepositRequest {
    pub amount: u64,
}

/// An avatar image selected for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for AvatarFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
