//! Networking modules for the auction REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the endpoint operations, `transport` is the seam where
//! requests leave the process, `types` defines the wire schema, and `error`
//! the failure taxonomy shared by all of them.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
