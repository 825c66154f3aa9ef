//! Common test utilities for hypr-auth-core integration tests

pub mod hypr_mock;
pub mod mocks;

#[allow(unused_imports)]
pub use hypr_mock::HyprMockServer;
#[allow(unused_imports)]
pub use mocks::{
    pending_context, FailingSessionStore, MockProvider, MockSessionStore, TEST_REQUEST_ID,
    TEST_SESSION_KEY,
};
