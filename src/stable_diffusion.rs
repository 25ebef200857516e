use crate::client::{parse_base_url, read_json};
use crate::error::Hunyuan3dError;
use crate::types::{Txt2ImgRequest, Txt2ImgResponse};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Default address of a local AUTOMATIC1111 WebUI.
pub const DEFAULT_SD_API_URL: &str = "http://localhost:7860";

const OPTIONS_TIMEOUT: Duration = Duration::from_secs(10);
const TXT2IMG_TIMEOUT: Duration = Duration::from_secs(60);

/// A minimal client for the Stable Diffusion WebUI API, used to produce the
/// source image of a 3D job.
#[derive(Clone, Debug)]
pub struct StableDiffusionClient {
    client: reqwest::Client,
    base_url: Url,
}

impl StableDiffusionClient {
    pub fn new() -> Result<Self, Hunyuan3dError> {
        Self::new_with_url(DEFAULT_SD_API_URL)
    }

    pub fn new_with_url(base_url: &str) -> Result<Self, Hunyuan3dError> {
        let client = reqwest::Client::builder().build()?;
        let base_url = parse_base_url(base_url)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Checks that the WebUI answers `GET /sdapi/v1/options` with `200 OK` and JSON.
    pub async fn health(&self) -> Result<(), Hunyuan3dError> {
        let url = self.base_url.join("sdapi/v1/options")?;
        debug!(%url, "checking image server health");
        let response = self.client.get(url).timeout(OPTIONS_TIMEOUT).send().await?;
        let _options: serde_json::Value = read_json(response).await?;
        Ok(())
    }

    /// Generates an image with `POST /sdapi/v1/txt2img`.
    ///
    /// # Returns
    ///
    /// The first generated image, base64-encoded.
    ///
    /// # Errors
    ///
    /// `Hunyuan3dError::NoImages` if the response holds no image.
    pub async fn txt2img(&self, request: &Txt2ImgRequest) -> Result<String, Hunyuan3dError> {
        let url = self.base_url.join("sdapi/v1/txt2img")?;
        debug!(%url, prompt = %request.prompt, steps = request.steps, "generating image");

        let response = self
            .client
            .post(url)
            .timeout(TXT2IMG_TIMEOUT)
            .json(request)
            .send()
            .await?;
        let generated: Txt2ImgResponse = read_json(response).await?;

        let image = generated
            .images
            .into_iter()
            .next()
            .ok_or(Hunyuan3dError::NoImages)?;
        info!(bytes = image.len(), "image generated");
        Ok(image)
    }
}
