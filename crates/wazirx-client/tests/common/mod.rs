/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for wazirx-client tests

use wazirx_client::{ClientConfig, Credentials, Registry, WazirxClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_SECRET_KEY: &str = "test-secret-key";

/// Registry matching the worked examples: one public GET, one signed POST,
/// one signed DELETE
#[allow(dead_code)]
pub const TEST_MAPPER: &str = r#"{
    "ping": {"client": "public", "action": "get", "endpoint": "ping", "url": "/v1/ping"},
    "create_order": {"client": "signed", "action": "post", "endpoint": "order", "url": "/v1/order"},
    "cancel_order": {"client": "signed", "action": "delete", "endpoint": "order", "url": "/v1/order"},
    "query_order": {"client": "signed", "action": "get", "endpoint": "order", "url": "/v1/order"}
}"#;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client with the embedded registry, pointed at `server`
#[allow(dead_code)]
pub fn embedded_client(server: &MockServer) -> WazirxClient {
    WazirxClient::with_config(test_credentials(), test_config(server)).expect("client init")
}

/// Client over `mapper`, pointed at `server`
#[allow(dead_code)]
pub fn client_with_mapper(server: &MockServer, mapper: &str) -> WazirxClient {
    let registry = Registry::from_json(mapper).expect("test mapper parses");
    WazirxClient::with_registry(test_credentials(), test_config(server), registry)
        .expect("client init")
}

#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_SECRET_KEY)
}

#[allow(dead_code)]
pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(server.uri())
}
