//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written once by the startup bootstrap, then again only by sign-in,
//! sign-up and settings actions. Read by the protected gate and every
//! user-aware page.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{Profile, SignUpData, User};
use crate::util::storage::TokenStore;

/// What the protected gate should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// User resolved: render the protected content.
    Render,
    /// Startup fetch still in flight: render nothing.
    Wait,
    /// No user: render nothing and send the visitor to sign-in.
    Redirect,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: User,
}

impl SessionState {
    pub fn gate(&self) -> GateDecision {
        match &self.user {
            User::Ready(_) => GateDecision::Render,
            User::NotOk { loading: true, .. } => GateDecision::Wait,
            User::NotOk { loading: false, .. } => GateDecision::Redirect,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.user.profile()
    }
}

/// Resolve the user at application mount.
///
/// When `startup_deposit` is set, the deposit is sent only after the user
/// resolved, awaited, and its returned profile replaces the fetched one. A
/// failed deposit keeps the fetched profile.
pub async fn bootstrap_session<T: Transport, S: TokenStore>(api: &ApiClient<T, S>, startup_deposit: Option<u64>) -> User {
    let profile = match api.get_user().await {
        Ok(profile) => profile,
        Err(e) => {
            if e.is_unauthorized() {
                log::info!("no valid session: {e}");
            } else {
                log::warn!("user fetch failed: {e}");
            }
            return User::failed(e);
        }
    };

    let Some(amount) = startup_deposit else {
        return User::Ready(profile);
    };
    match api.add_deposit(amount).await {
        Ok(updated) => User::Ready(updated),
        Err(e) => {
            log::warn!("startup deposit of {amount} failed: {e}");
            User::Ready(profile)
        }
    }
}

/// Sign in, persist the token, and fetch the signed-in profile.
///
/// # Errors
///
/// Returns the first failing step's error; the token is only stored after a
/// successful sign-in.
pub async fn establish_session<T: Transport, S: TokenStore>(
    api: &ApiClient<T, S>,
    email: &str,
    password: &str,
) -> Result<Profile, ApiError> {
    let res = api.sign_in(email, password).await?;
    api.tokens().save(&res.token);
    api.get_user().await
}

/// Create an account, then sign in with the same credentials.
///
/// # Errors
///
/// Returns the first failing step's error.
pub async fn register<T: Transport, S: TokenStore>(api: &ApiClient<T, S>, data: &SignUpData) -> Result<Profile, ApiError> {
    api.sign_up(data).await?;
    establish_session(api, &data.email, &data.password).await
}
