use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The body of a `POST /send` request that starts an image-to-3D job.
#[derive(Serialize, Debug, Clone)]
pub struct GenerationRequest {
    /// The source image, base64-encoded.
    pub image: String,
    /// Ask the server to strip the image background before reconstruction.
    pub remove_background: bool,
    /// Generate a texture for the mesh after the shape stage.
    pub texture: bool,
    pub seed: u64,
    pub num_chunks: u32,
    /// Target face count of the output mesh.
    pub face_count: u32,
}

impl GenerationRequest {
    /// Creates a request for `image` with the stock generation parameters.
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            remove_background: true,
            texture: true,
            seed: 42,
            num_chunks: 4,
            face_count: 10_000,
        }
    }
}

/// (Internal) The response to `POST /send`.
#[derive(Deserialize, Debug)]
pub(crate) struct SubmitResponse {
    #[serde(default)]
    pub(crate) uid: Option<String>,
}

/// The lifecycle state of a generation job, as reported by `GET /status/{uid}`.
///
/// Unrecognized statuses are kept in [`JobState::Other`] so that new server-side
/// stages never break polling. A missing or `null` status reads as `Other("null")`
/// and a non-string one as its JSON text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum JobState {
    /// The shape stage is running.
    Processing,
    /// The texture stage is running.
    Texturing,
    /// The job finished and the model is available.
    Completed,
    /// The job failed on the server.
    Error,
    /// Any status this client does not know about.
    Other(String),
}

impl JobState {
    /// Returns `true` once no further transition can happen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Error)
    }

    /// The console line printed while polling a job in this state.
    pub fn progress_line(&self) -> String {
        match self {
            JobState::Processing => "⏳ processing...".to_string(),
            JobState::Texturing => "🎨 texturing...".to_string(),
            other => format!("📊 current status: {}", other),
        }
    }
}

impl From<String> for JobState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "processing" => JobState::Processing,
            "texturing" => JobState::Texturing,
            "completed" => JobState::Completed,
            "error" => JobState::Error,
            _ => JobState::Other(raw),
        }
    }
}

impl Default for JobState {
    fn default() -> Self {
        JobState::Other("null".to_string())
    }
}

impl<'de> Deserialize<'de> for JobState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(raw) => JobState::from(raw),
            serde_json::Value::Null => JobState::default(),
            other => JobState::Other(other.to_string()),
        })
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobState::Processing => f.write_str("processing"),
            JobState::Texturing => f.write_str("texturing"),
            JobState::Completed => f.write_str("completed"),
            JobState::Error => f.write_str("error"),
            JobState::Other(raw) => f.write_str(raw),
        }
    }
}

/// A snapshot of a job as observed through `GET /status/{uid}`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct JobStatus {
    /// The current lifecycle state.
    #[serde(default)]
    pub status: JobState,
    /// The server-provided message, set when the job failed.
    #[serde(default)]
    pub message: Option<String>,
    /// The generated GLB model, base64-encoded, once the job has completed.
    #[serde(default)]
    pub model_base64: Option<String>,
}

/// The response to `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Health {
    /// The identifier of the worker that answered, if the server reports one.
    pub worker_id: Option<String>,
}

/// The body of a `POST /sdapi/v1/txt2img` request.
#[derive(Serialize, Debug, Clone)]
pub struct Txt2ImgRequest {
    pub prompt: String,
    pub steps: u32,
    pub width: u32,
    pub height: u32,
    pub cfg_scale: f32,
    pub sampler_index: String,
}

impl Txt2ImgRequest {
    /// Creates a 512x512, 20-step request for `prompt` using the `Euler a` sampler.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            steps: 20,
            width: 512,
            height: 512,
            cfg_scale: 7.0,
            sampler_index: "Euler a".to_string(),
        }
    }
}

/// (Internal) The response to `POST /sdapi/v1/txt2img`.
#[derive(Deserialize, Debug)]
pub(crate) struct Txt2ImgResponse {
    #[serde(default)]
    pub(crate) images: Vec<String>,
}
