//! API error taxonomy.

/// Errors produced by API client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Sign-in was attempted without an email or password.
    #[error("Email and password are required")]
    MissingCredentials,

    /// Avatar upload was attempted without a file.
    #[error("No avatar provided")]
    MissingAvatar,

    /// The server answered with a non-success HTTP status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// The request could not be sent or the response body could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// A success response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The request itself could not be assembled.
    #[error("request build failed: {0}")]
    Request(String),

    /// Browser transport invoked outside the browser.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Whether the server rejected the caller's credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}
