//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled:
//!
//! - `AUCTION_API_BASE_URL`: API origin (default `http://localhost:3000`)
//! - `AUCTION_STARTUP_DEPOSIT`: optional amount deposited once the user is
//!   resolved at startup

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Local-storage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Errors produced while parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The startup deposit was not a positive integer.
    #[error("invalid AUCTION_STARTUP_DEPOSIT: {0}")]
    InvalidDeposit(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub token_key: String,
    pub startup_deposit: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_key: TOKEN_STORAGE_KEY.to_owned(),
            startup_deposit: None,
        }
    }
}

impl ClientConfig {
    /// Build config from the environment captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns an error if `AUCTION_STARTUP_DEPOSIT` is set but not a positive integer.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("AUCTION_API_BASE_URL"), option_env!("AUCTION_STARTUP_DEPOSIT"))
    }

    /// Build config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns an error if `startup_deposit` is present but not a positive integer.
    pub fn from_values(api_base_url: Option<&str>, startup_deposit: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(api_base_url);
        let startup_deposit = parse_deposit(startup_deposit)?;
        Ok(Self { api_base_url, token_key: TOKEN_STORAGE_KEY.to_owned(), startup_deposit })
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn parse_deposit(raw: Option<&str>) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidDeposit(raw.to_owned())),
        Ok(amount) => Ok(Some(amount)),
    }
}
