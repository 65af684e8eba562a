//! Bearer token persistence.
//!
//! The browser store reads and writes `localStorage` synchronously, so the
//! API client can look the token up right before every authenticated call.
//! Outside the browser it behaves as an always-empty store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Somewhere the session token lives between requests.
pub trait TokenStore {
    /// Current token, if one has been stored.
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
}

/// Token store backed by `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(&self.key).ok().flatten().filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(&self.key, token).is_err() {
                    log::warn!("failed to persist session token");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }
}

/// `Authorization` header value for the given token.
///
/// A missing token still yields a header; the server decides how to reject it.
pub fn bearer_header(token: Option<&str>) -> String {
    format!("Bearer {}", token.unwrap_or_default())
}
