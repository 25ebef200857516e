//! A polling client and integration probe for the Hunyuan3D generation server.
//!
//! The crate talks to two independently run HTTP services: the Hunyuan3D
//! server, which turns an image into a 3D model asynchronously, and an optional
//! Stable Diffusion WebUI used to produce that image from a text prompt.
//!
//! ## Features
//! - Health checks for both services.
//! - Job submission and status queries.
//! - Fixed-interval polling with a wall-clock timeout.
//! - Helpers that write the generated image and model to disk.
//! - Typed error handling.

mod artifacts;
mod client;
pub mod config;
mod error;
mod stable_diffusion;
mod types;

pub use artifacts::{save_image, save_model};
pub use client::{Hunyuan3dClient, DEFAULT_API_URL, DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL};
pub use config::Config;
pub use error::Hunyuan3dError;
pub use stable_diffusion::{StableDiffusionClient, DEFAULT_SD_API_URL};
pub use types::{GenerationRequest, Health, JobState, JobStatus, Txt2ImgRequest};
