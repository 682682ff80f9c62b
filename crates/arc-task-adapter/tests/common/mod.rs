/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for arc-task-adapter tests

use arc_task_adapter::{ArcClient, ClientConfig};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client whose ARC 1 and ARC 2 bases point at the mock server
pub fn client_for(server: &MockServer) -> ArcClient {
    ArcClient::with_config_and_api_bases(
        ClientConfig::default(),
        &format!("{}/repos/fchollet/ARC/contents/data", server.uri()),
        &format!("{}/repos/arcprize/ARC-AGI-2/contents/data", server.uri()),
    )
    .expect("client init")
}

/// Minimal task document with one training and one test pair
pub fn sample_task_json() -> serde_json::Value {
    serde_json::json!({
        "train": [{"input": [[0, 1], [1, 0]], "output": [[1, 0], [0, 1]]}],
        "test": [{"input": [[1, 1, 0], [0, 0, 0]], "output": [[0, 0, 1], [1, 1, 1]]}]
    })
}
