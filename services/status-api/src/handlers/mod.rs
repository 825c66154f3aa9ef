//! HTTP handlers

mod health;
mod sessions;
mod status;

pub use health::health;
pub use sessions::{delete_session, put_session};
pub use status::authentication_status;
