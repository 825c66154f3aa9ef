//! HYPR Auth Core - Authentication status resolution
//!
//! Resolves the status of an in-progress HYPR authentication from the cached
//! session context, polling the HYPR API only while the status is not yet
//! terminal.

pub mod config;
pub mod context;
pub mod error;
pub mod hypr;
pub mod provider;
pub mod service;
pub mod store;

pub use config::*;
pub use context::*;
pub use error::*;
pub use hypr::HyprClient;
pub use provider::AuthenticationProvider;
pub use service::*;
pub use store::*;
