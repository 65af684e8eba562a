//! Reusable UI components shared by pages.

pub mod main_layout;
pub mod protected_page;
