//! Integration tests using WireMock
//!
//! These tests drive the public client against a mock HTTP server and cover
//! the full request/response cycle: authentication headers, URL composition,
//! error mapping, date revival and the OAuth2 code exchange.

mod client_pipeline;
mod oauth_flow;
mod services;

use integrations_matchday::{ApiVersion, MatchDayClient};
use wiremock::{MockServer, ResponseTemplate};

/// Helper to create a mock server
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Helper to create a client authenticated with an API key
pub fn api_key_client(server: &MockServer) -> MatchDayClient {
    MatchDayClient::builder()
        .base_url(server.uri())
        .api_key("test-api-key")
        .build()
        .expect("Failed to build client")
}

/// Helper to create a client without a version prefix
pub fn unversioned_client(server: &MockServer) -> MatchDayClient {
    MatchDayClient::builder()
        .base_url(server.uri())
        .api_version(ApiVersion::Unversioned)
        .api_key("test-api-key")
        .build()
        .expect("Failed to build client")
}

/// Helper to create success response templates
pub fn success_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}
