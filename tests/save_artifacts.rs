use hunyuan3d_probe::{save_image, save_model, Hunyuan3dError, JobState, JobStatus};

fn completed(model_base64: Option<&str>) -> JobStatus {
    JobStatus {
        status: JobState::Completed,
        message: None,
        model_base64: model_base64.map(str::to_string),
    }
}

#[tokio::test]
async fn test_save_model_writes_glb_named_after_uid() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("models");

    let path = save_model(&completed(Some("Z2xURg==")), "job-1", &dest)
        .await
        .unwrap();

    assert_eq!(path, dest.join("job-1.glb"));
    assert_eq!(std::fs::read(&path).unwrap(), b"glTF");
}

#[tokio::test]
async fn test_save_model_without_payload() {
    let dir = tempfile::tempdir().unwrap();

    let err = save_model(&completed(None), "job-1", dir.path())
        .await
        .unwrap_err();

    assert!(matches!(err, Hunyuan3dError::MissingField("model_base64")));
}

#[tokio::test]
async fn test_save_model_with_corrupt_payload() {
    let dir = tempfile::tempdir().unwrap();

    let err = save_model(&completed(Some("not base64!")), "job-1", dir.path())
        .await
        .unwrap_err();

    assert!(matches!(err, Hunyuan3dError::InvalidBase64(_)));
}

#[tokio::test]
async fn test_save_image_strips_data_url_prefix() {
    let dir = tempfile::tempdir().unwrap();

    let path = save_image("data:image/png;base64,aW1n", dir.path(), "test_image")
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("test_image.png"));
    assert_eq!(std::fs::read(&path).unwrap(), b"img");
}
