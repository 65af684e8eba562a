//! Route paths, the path resolver, and the access table.
//!
//! The rendered route tree lives in `app`. Which of its pages sit behind the
//! authentication gate is decided here, by [`Page::requires_auth`], and
//! applied to the current location by [`gate_for_path`].

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::{GateDecision, SessionState};

pub const HOME: &str = "/home";
pub const PROFILE: &str = "/profile";
pub const SETTINGS: &str = "/settings";
pub const EXPLORE: &str = "/explore";
pub const AUCTION_ITEMS: &str = "/auction-items";
pub const SIGN_IN: &str = "/sign-in";
pub const SIGN_UP: &str = "/sign-up";

/// A page reachable through the route tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Profile,
    Settings,
    Explore,
    AuctionItems,
    AuctionItem { id: String },
    SignIn,
    SignUp,
}

impl Page {
    /// Whether the page sits behind the protected gate.
    pub fn requires_auth(&self) -> bool {
        match self {
            Self::Home | Self::Profile | Self::Settings | Self::AuctionItem { .. } => true,
            Self::Explore | Self::AuctionItems | Self::SignIn | Self::SignUp => false,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => HOME.to_owned(),
            Self::Profile => format!("{HOME}{PROFILE}"),
            Self::Settings => format!("{HOME}{SETTINGS}"),
            Self::Explore => EXPLORE.to_owned(),
            Self::AuctionItems => format!("{EXPLORE}{AUCTION_ITEMS}"),
            Self::AuctionItem { id } => auction_item_path(id),
            Self::SignIn => SIGN_IN.to_owned(),
            Self::SignUp => SIGN_UP.to_owned(),
        }
    }
}

pub fn auction_item_path(id: &str) -> String {
    format!("{EXPLORE}{AUCTION_ITEMS}/{id}")
}

/// Map a URL path to its page. `None` means the not-found fallback renders.
///
/// Query strings, fragments and a trailing slash are ignored.
pub fn resolve(path: &str) -> Option<Page> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["home"] => Some(Page::Home),
        ["home", "profile"] => Some(Page::Profile),
        ["home", "settings"] => Some(Page::Settings),
        ["explore"] => Some(Page::Explore),
        ["explore", "auction-items"] => Some(Page::AuctionItems),
        ["explore", "auction-items", id] => Some(Page::AuctionItem { id: (*id).to_owned() }),
        ["sign-in"] => Some(Page::SignIn),
        ["sign-up"] => Some(Page::SignUp),
        _ => None,
    }
}

/// Gate decision for the page at `path`.
///
/// Public pages and unknown paths always render; gated pages follow the
/// session.
pub fn gate_for_path(path: &str, session: &SessionState) -> GateDecision {
    match resolve(path) {
        Some(page) if page.requires_auth() => session.gate(),
        Some(_) | None => GateDecision::Render,
    }
}
