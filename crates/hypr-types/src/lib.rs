//! HYPR Types - Shared domain types
//!
//! This crate contains domain types used across the status services:
//! - Session keys identifying in-progress authentication flows
//! - Authentication statuses and provider state sequences
//! - Caller-facing response and error envelopes

pub mod api;
pub mod error;
pub mod provider;
pub mod session;
pub mod status;

pub use api::*;
pub use error::*;
pub use provider::*;
pub use session::*;
pub use status::*;
