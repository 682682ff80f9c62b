/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client and TaskSource wiring
[POS]:    Integration tests - listing and content endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use arc_task_adapter::{
    ArcClient, ArcError, ClientConfig, DatasetVersion, Subset, TaskEntry, TaskSource,
};
use common::{client_for, sample_task_json, setup_mock_server};
use rstest::rstest;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(ArcClient::new());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default();
    let _client = assert_ok!(ArcClient::with_config(config));
}

#[test]
fn test_default_api_bases() {
    let client = assert_ok!(ArcClient::new());
    assert_eq!(
        client.api_base(DatasetVersion::Arc1).as_str(),
        "https://api.github.com/repos/fchollet/ARC/contents/data/"
    );
    assert_eq!(
        client.api_base(DatasetVersion::Arc2).as_str(),
        "https://api.github.com/repos/arcprize/ARC-AGI-2/contents/data/"
    );
}

#[rstest]
#[case(DatasetVersion::Arc1, Subset::Training, "/repos/fchollet/ARC/contents/data/training")]
#[case(DatasetVersion::Arc1, Subset::Evaluation, "/repos/fchollet/ARC/contents/data/evaluation")]
#[case(DatasetVersion::Arc2, Subset::Training, "/repos/arcprize/ARC-AGI-2/contents/data/training")]
#[tokio::test]
async fn test_listing_path_per_dataset(
    #[case] version: DatasetVersion,
    #[case] subset: Subset,
    #[case] expected_path: &str,
) {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(expected_path))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"name": "x.json", "download_url": "https://raw.example/x.json"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entries = assert_ok!(client.list_tasks(version, subset).await);
    assert_eq!(entries, vec![TaskEntry::new("x.json", "https://raw.example/x.json")]);
}

#[tokio::test]
async fn test_task_source_fetches_through_download_url() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/raw/abc.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_task_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entry = TaskEntry::new("abc.json", format!("{}/raw/abc.json", server.uri()));
    let task = assert_ok!(TaskSource::fetch_task(&client, &entry).await);

    assert_eq!(task.train.len(), 1);
    assert_eq!(task.test[0].input.dimensions(), (2, 3));
}

#[tokio::test]
async fn test_task_source_entry_without_url() {
    let client = assert_ok!(ArcClient::new());
    let entry = TaskEntry {
        name: "folder".to_string(),
        download_url: None,
    };

    let err = TaskSource::fetch_task(&client, &entry).await.unwrap_err();
    assert!(matches!(err, ArcError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_fetch_non_json_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/raw/broken.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .fetch_task(&format!("{}/raw/broken.json", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, ArcError::Serialization(_)));
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .list_tasks(DatasetVersion::Arc2, Subset::Training)
        .await
        .unwrap_err();
    match err {
        ArcError::Api { code, message } => {
            assert_eq!(code, 502);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}
