use hunyuan3d_probe::{Hunyuan3dClient, Hunyuan3dError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

#[tokio::test]
async fn test_health_reports_worker_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(common::ok_json(json!({ "status": "healthy", "worker_id": "a1b2c3" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Hunyuan3dClient::new_with_url(&server.uri()).unwrap();
    let health = client.health().await.unwrap();

    assert_eq!(health.worker_id.as_deref(), Some("a1b2c3"));
}

#[tokio::test]
async fn test_health_without_worker_id_still_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(common::ok_json(json!({ "worker_id": 7 })))
        .mount(&server)
        .await;

    let client = Hunyuan3dClient::new_with_url(&server.uri()).unwrap();
    let health = client.health().await.unwrap();

    assert_eq!(health.worker_id.as_deref(), Some("7"));
}

#[tokio::test]
async fn test_health_non_200_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("warming up"))
        .mount(&server)
        .await;

    let client = Hunyuan3dClient::new_with_url(&server.uri()).unwrap();
    let err = client.health().await.unwrap_err();

    match err {
        Hunyuan3dError::ApiError { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "warming up");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_health_with_unparseable_body_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let client = Hunyuan3dClient::new_with_url(&server.uri()).unwrap();
    let err = client.health().await.unwrap_err();

    assert!(matches!(err, Hunyuan3dError::ResponseParseFailed(_)));
}

#[tokio::test]
async fn test_health_connection_error_is_reported() {
    let uri = common::unreachable_uri();

    let client = Hunyuan3dClient::new_with_url(&uri).unwrap();
    let err = client.health().await.unwrap_err();

    assert!(matches!(err, Hunyuan3dError::RequestFailed(_)));
}
