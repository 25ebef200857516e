use hunyuan3d_probe::{GenerationRequest, Hunyuan3dClient, Hunyuan3dError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

#[tokio::test]
async fn test_submit_job_returns_uid() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send"))
        .and(body_json(json!({
            "image": "aW1hZ2U=",
            "remove_background": true,
            "texture": true,
            "seed": 42,
            "num_chunks": 4,
            "face_count": 10000
        })))
        .respond_with(common::ok_json(json!({ "uid": "job-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Hunyuan3dClient::new_with_url(&server.uri()).unwrap();
    let uid = client
        .submit_job(&GenerationRequest::new("aW1hZ2U="))
        .await
        .unwrap();

    assert_eq!(uid, "job-1");
}

#[tokio::test]
async fn test_submit_job_without_uid_is_missing_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(common::ok_json(json!({ "queued": true })))
        .mount(&server)
        .await;

    let client = Hunyuan3dClient::new_with_url(&server.uri()).unwrap();
    let err = client
        .submit_job(&GenerationRequest::new("aW1hZ2U="))
        .await
        .unwrap_err();

    assert!(matches!(err, Hunyuan3dError::MissingField("uid")));
}

#[tokio::test]
async fn test_submit_job_rejected_by_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid image"))
        .mount(&server)
        .await;

    let client = Hunyuan3dClient::new_with_url(&server.uri()).unwrap();
    let err = client
        .submit_job(&GenerationRequest::new("not-an-image"))
        .await
        .unwrap_err();

    assert!(matches!(err, Hunyuan3dError::ApiError { status: 422, .. }));
}
