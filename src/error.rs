use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Hunyuan3dError {
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Failed to parse API response: {0}")]
    ResponseParseFailed(#[from] serde_json::Error),
    /// The server answered with something other than `200 OK`.
    #[error("API request failed with status {status}: {message}")]
    ApiError { status: u16, message: String },
    #[error("API response is missing the `{0}` field")]
    MissingField(&'static str),
    #[error("Image generation returned no images")]
    NoImages,
    /// The job reached the `error` status on the server.
    #[error("Job {uid} failed: {message}")]
    JobFailed { uid: String, message: String },
    #[error("Timed out after {}s waiting for job {uid}", .waited.as_secs())]
    Timeout { uid: String, waited: Duration },
    #[error("Base URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),
    #[error("URL parsing failed: {0}")]
    UrlParseFailed(#[from] url::ParseError),
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

impl Hunyuan3dError {
    /// Returns `true` if the error came from the server-side job rather than the transport.
    pub fn is_job_failure(&self) -> bool {
        matches!(self, Self::JobFailed { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
