use crate::error::Hunyuan3dError;
use crate::types::{GenerationRequest, Health, JobState, JobStatus, SubmitResponse};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8081";

/// How long [`Hunyuan3dClient::wait_for_job`] waits when no other limit is given.
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(300);

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

const HEALTH_TIMEOUT: Duration = Duration::from_secs(10);
const STATUS_TIMEOUT: Duration = Duration::from_secs(10);
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// The client for the Hunyuan3D generation server.
///
/// It holds the shared `reqwest::Client`, the base URL for all requests and the
/// fixed interval used between status polls. It is cheap to clone.
#[derive(Clone, Debug)]
pub struct Hunyuan3dClient {
    client: reqwest::Client,
    base_url: Url,
    poll_interval: Duration,
}

impl Hunyuan3dClient {
    /// Creates a client for a server running on the default local port.
    ///
    /// # Errors
    ///
    /// - `Hunyuan3dError::RequestFailed` if the internal HTTP client fails to build.
    pub fn new() -> Result<Self, Hunyuan3dError> {
        Self::new_with_url(DEFAULT_API_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// - `Hunyuan3dError::RequestFailed` if the internal HTTP client fails to build.
    /// - `Hunyuan3dError::UrlParseFailed` if `base_url` is invalid.
    /// - `Hunyuan3dError::InvalidBaseUrl` if `base_url` cannot carry a path.
    pub fn new_with_url(base_url: &str) -> Result<Self, Hunyuan3dError> {
        let client = reqwest::Client::builder().build()?;
        let base_url = parse_base_url(base_url)?;

        Ok(Self {
            client,
            base_url,
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Replaces the delay between two status polls.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Queries `GET /health`.
    ///
    /// Succeeds only on `200 OK` with a JSON body. The worker identifier is
    /// optional and is reported as text whatever its JSON type.
    pub async fn health(&self) -> Result<Health, Hunyuan3dError> {
        let url = self.base_url.join("health")?;
        debug!(%url, "checking server health");
        let response = self.client.get(url).timeout(HEALTH_TIMEOUT).send().await?;
        let body: serde_json::Value = read_json(response).await?;

        let worker_id = body.get("worker_id").and_then(|id| match id {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        });

        Ok(Health { worker_id })
    }

    /// Submits an image-to-3D job through `POST /send`.
    ///
    /// # Returns
    ///
    /// The `uid` of the newly created job.
    ///
    /// # Errors
    ///
    /// `Hunyuan3dError::MissingField("uid")` if the server accepted the request
    /// but did not return an identifier.
    pub async fn submit_job(&self, request: &GenerationRequest) -> Result<String, Hunyuan3dError> {
        let url = self.base_url.join("send")?;
        debug!(%url, seed = request.seed, face_count = request.face_count, "submitting job");

        let response = self
            .client
            .post(url)
            .timeout(SUBMIT_TIMEOUT)
            .json(request)
            .send()
            .await?;
        let submitted: SubmitResponse = read_json(response).await?;

        let uid = submitted.uid.ok_or(Hunyuan3dError::MissingField("uid"))?;
        info!(%uid, "job submitted");
        Ok(uid)
    }

    /// Retrieves the current status of a job.
    ///
    /// The `uid` is sent as a single path segment, percent-encoded, so `/`, `?`
    /// or `#` in it never reach another endpoint. A missing or unrecognized
    /// `status` in the body is reported as [`JobState::Other`].
    pub async fn get_status(&self, uid: &str) -> Result<JobStatus, Hunyuan3dError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Hunyuan3dError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("status")
            .push(uid);

        let response = self.client.get(url).timeout(STATUS_TIMEOUT).send().await?;
        read_json(response).await
    }

    /// Waits for a job to finish by polling its status at a fixed interval.
    ///
    /// A status request is issued while less than `max_wait` has elapsed since the
    /// first one. `processing`, `texturing` and unrecognized statuses keep the loop
    /// going; there is no retry or backoff.
    ///
    /// # Arguments
    ///
    /// * `uid` - The ID of the job to wait for.
    /// * `max_wait` - The wall-clock budget for the whole loop.
    /// * `verbose` - If `true`, prints a progress line for every non-terminal status.
    ///
    /// # Returns
    ///
    /// The final [`JobStatus`] when the job completed.
    ///
    /// # Errors
    ///
    /// - `Hunyuan3dError::JobFailed` with the server message when the job reports `error`.
    /// - `Hunyuan3dError::Timeout` when `max_wait` runs out.
    /// - Any error from [`get_status`](Self::get_status), returned on the first failed poll.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use hunyuan3d_probe::{Hunyuan3dClient, DEFAULT_MAX_WAIT};
    /// # #[tokio::main]
    /// # async fn main() -> anyhow::Result<()> {
    /// let client = Hunyuan3dClient::new()?;
    /// let job = client.wait_for_job("some-uid", DEFAULT_MAX_WAIT, true).await?;
    /// println!("Job finished with status: {}", job.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn wait_for_job(
        &self,
        uid: &str,
        max_wait: Duration,
        verbose: bool,
    ) -> Result<JobStatus, Hunyuan3dError> {
        let started = Instant::now();
        let mut polls: u32 = 0;
        let mut last_state: Option<JobState> = None;

        while started.elapsed() < max_wait {
            polls += 1;
            let job = match self.get_status(uid).await {
                Ok(job) => job,
                Err(e) => {
                    warn!(%uid, polls, error = %e, "status query failed");
                    return Err(e);
                }
            };

            if last_state.as_ref() != Some(&job.status) {
                info!(%uid, polls, status = %job.status, "job status changed");
            }

            match job.status {
                JobState::Completed => {
                    info!(%uid, polls, elapsed = ?started.elapsed(), "job completed");
                    return Ok(job);
                }
                JobState::Error => {
                    let message = job.message.unwrap_or_else(|| "unknown error".to_string());
                    warn!(%uid, polls, %message, "job failed");
                    return Err(Hunyuan3dError::JobFailed {
                        uid: uid.to_string(),
                        message,
                    });
                }
                state => {
                    if verbose {
                        println!("{}", state.progress_line());
                    }
                    last_state = Some(state);
                }
            }

            sleep(self.poll_interval).await;
        }

        warn!(%uid, polls, "gave up waiting for job");
        Err(Hunyuan3dError::Timeout {
            uid: uid.to_string(),
            waited: max_wait,
        })
    }
}

/// Parses a base URL so that relative endpoint paths join under it.
///
/// URLs that cannot carry a path, such as `mailto:`, are rejected.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, Hunyuan3dError> {
    let url = if base_url.ends_with('/') {
        Url::parse(base_url)?
    } else {
        Url::parse(&format!("{}/", base_url))?
    };

    if url.cannot_be_a_base() {
        return Err(Hunyuan3dError::InvalidBaseUrl(base_url.to_string()));
    }
    Ok(url)
}

/// Reads a response body and decodes it as JSON.
///
/// Anything other than `200 OK` becomes `Hunyuan3dError::ApiError` carrying the
/// status code and the body text.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, Hunyuan3dError> {
    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        return Err(Hunyuan3dError::ApiError {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
