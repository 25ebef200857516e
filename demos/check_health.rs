//! Checks both services once and prints what they report.
//!
//! Usage:
//! `cargo run --example check_health`

use hunyuan3d_probe::{Config, Hunyuan3dClient, StableDiffusionClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    let hunyuan = Hunyuan3dClient::new_with_url(&config.hunyuan3d_url)?;
    match hunyuan.health().await {
        Ok(health) => println!("Hunyuan3D at {} is up: {:?}", hunyuan.base_url(), health),
        Err(e) => eprintln!("Hunyuan3D at {} is down: {}", hunyuan.base_url(), e),
    }

    let sd = StableDiffusionClient::new_with_url(&config.stable_diffusion_url)?;
    match sd.health().await {
        Ok(()) => println!("Stable Diffusion at {} is up", sd.base_url()),
        Err(e) => eprintln!("Stable Diffusion at {} is down: {}", sd.base_url(), e),
    }

    Ok(())
}
