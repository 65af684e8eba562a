//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it reads the session from
//! `AppContext`, validates form input, and runs API calls on the local
//! task executor.

pub mod auction_item;
pub mod auction_items;
pub mod explore;
pub mod home;
pub mod not_found;
pub mod profile;
pub mod settings;
pub mod sign_in;
pub mod sign_up;
