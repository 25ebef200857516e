//! Environment-driven settings for the integration probe.

use crate::client::{DEFAULT_API_URL, DEFAULT_MAX_WAIT};
use crate::stable_diffusion::DEFAULT_SD_API_URL;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const HUNYUAN3D_API_URL_VAR: &str = "HUNYUAN3D_API_URL";
pub const STABLE_DIFFUSION_API_URL_VAR: &str = "STABLE_DIFFUSION_API_URL";
pub const MAX_WAIT_VAR: &str = "HUNYUAN3D_MAX_WAIT_SECS";
pub const OUTPUT_DIR_VAR: &str = "HUNYUAN3D_OUTPUT_DIR";

/// Where the two services live and how long to wait for a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub hunyuan3d_url: String,
    pub stable_diffusion_url: String,
    /// Wall-clock budget for polling a submitted job.
    pub max_wait: Duration,
    /// If set, the generated image and model are written here.
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hunyuan3d_url: DEFAULT_API_URL.to_string(),
            stable_diffusion_url: DEFAULT_SD_API_URL.to_string(),
            max_wait: DEFAULT_MAX_WAIT,
            output_dir: None,
        }
    }
}

impl Config {
    /// Loads the configuration from the process environment, reading a `.env`
    /// file first if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unset or empty variables keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let max_wait = match get(MAX_WAIT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    warn!(value = %raw, "invalid {}, using default", MAX_WAIT_VAR);
                    defaults.max_wait
                }
            },
            None => defaults.max_wait,
        };

        Self {
            hunyuan3d_url: get(HUNYUAN3D_API_URL_VAR).unwrap_or(defaults.hunyuan3d_url),
            stable_diffusion_url: get(STABLE_DIFFUSION_API_URL_VAR)
                .unwrap_or(defaults.stable_diffusion_url),
            max_wait,
            output_dir: get(OUTPUT_DIR_VAR).map(PathBuf::from),
        }
    }
}
