//! Mock HYPR API server for integration testing
//!
//! Provides a wiremock-based authentication request status endpoint.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MOCK_API_TOKEN: &str = "mock-api-token";

/// Mock HYPR API server
pub struct HyprMockServer {
    server: MockServer,
}

impl HyprMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock server (without trailing slash)
    pub fn url(&self) -> String {
        self.server.uri()
    }

    fn status_path(request_id: &str) -> String {
        format!("/rp/api/oob/client/authentication/requests/{request_id}")
    }

    /// Respond to an authorized status request with the given state body
    pub async fn mount_states(&self, request_id: &str, states: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(Self::status_path(request_id)))
            .and(header("authorization", format!("Bearer {MOCK_API_TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "requestId": request_id,
                "namedUser": "alice",
                "machine": "WEB",
                "state": states,
            })))
            .expect(1..)
            .mount(&self.server)
            .await;
    }

    /// Respond to any status request with an error status and body
    #[allow(dead_code)]
    pub async fn mount_error(&self, request_id: &str, status: u16, body: Option<serde_json::Value>) {
        let mut template = ResponseTemplate::new(status);
        if let Some(body) = body {
            template = template.set_body_json(body);
        }
        Mock::given(method("GET"))
            .and(path(Self::status_path(request_id)))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// Respond with a raw body
    #[allow(dead_code)]
    pub async fn mount_raw(&self, request_id: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(Self::status_path(request_id)))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has received
    #[allow(dead_code)]
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or_default()
    }
}
