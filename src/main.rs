//! Runs the end-to-end check of a Hunyuan3D deployment:
//! 1. Checking the Hunyuan3D server health.
//! 2. Checking the optional Stable Diffusion WebUI.
//! 3. Generating a source image from a text prompt.
//! 4. Submitting a 3D generation job for that image.
//! 5. Polling the job until it completes, fails or times out.
//!
//! Service addresses come from `HUNYUAN3D_API_URL` and `STABLE_DIFFUSION_API_URL`
//! (or a `.env` file). Every failure is reported on the console and the process
//! still exits normally.
//!
//! Usage:
//! `cargo run --bin hunyuan3d-probe`

use hunyuan3d_probe::{
    save_image, save_model, Config, GenerationRequest, Hunyuan3dClient, Hunyuan3dError,
    StableDiffusionClient, Txt2ImgRequest,
};
use tracing_subscriber::EnvFilter;

const TEST_PROMPT: &str =
    "a modern wooden chair, product photography, white background, high quality";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hunyuan3d_probe=warn")),
        )
        .init();

    let config = Config::from_env();

    let hunyuan = Hunyuan3dClient::new_with_url(&config.hunyuan3d_url)?;
    let stable_diffusion = StableDiffusionClient::new_with_url(&config.stable_diffusion_url)?;

    println!("🚀 Starting Hunyuan3D integration test");
    println!("{}", "=".repeat(60));

    println!("\n1. Checking the Hunyuan3D API server...");
    if !check_hunyuan3d_health(&hunyuan).await {
        println!("❌ Hunyuan3D API server is unavailable, start it first");
        println!("   Start command: python api_server.py --host 0.0.0.0 --port 8081");
        return Ok(());
    }

    println!("\n2. Checking the Stable Diffusion API server...");
    let sd_available = check_stable_diffusion_health(&stable_diffusion).await;

    println!("\n3. Generating the test image...");
    if !sd_available {
        println!("⚠️ Stable Diffusion is unavailable, skipping image and 3D generation");
        println!("   Start the AUTOMATIC1111 WebUI for the full test");
        return Ok(());
    }
    let Some(image) = generate_test_image(&stable_diffusion, TEST_PROMPT).await else {
        println!("⚠️ Stable Diffusion failed to generate an image, skipping 3D generation");
        return Ok(());
    };
    if let Some(dir) = &config.output_dir {
        match save_image(&image, dir, "test_image").await {
            Ok(path) => println!("   Image saved to {}", path.display()),
            Err(e) => println!("⚠️ Failed to save image: {}", e),
        }
    }

    println!("\n4. Submitting the 3D generation job...");
    let Some(uid) = submit_generation(&hunyuan, &image).await else {
        println!("❌ 3D generation job submission failed");
        return Ok(());
    };

    println!("\n5. Monitoring generation progress...");
    match hunyuan.wait_for_job(&uid, config.max_wait, true).await {
        Ok(job) => {
            println!("✅ 3D model generation completed");
            if let Some(dir) = &config.output_dir {
                match save_model(&job, &uid, dir).await {
                    Ok(path) => println!("   Model saved to {}", path.display()),
                    Err(e) => println!("⚠️ Failed to save model: {}", e),
                }
            }
            print_summary();
        }
        Err(e) => {
            report_wait_failure(&e);
            println!("\n❌ Integration test failed, check the server logs");
        }
    }

    Ok(())
}

async fn check_hunyuan3d_health(client: &Hunyuan3dClient) -> bool {
    match client.health().await {
        Ok(health) => {
            println!(
                "✅ Hunyuan3D API server is running - Worker ID: {}",
                health.worker_id.as_deref().unwrap_or("unknown")
            );
            true
        }
        Err(Hunyuan3dError::ApiError { status, .. }) => {
            println!("❌ Hunyuan3D API server returned an error - status code: {}", status);
            false
        }
        Err(e) => {
            println!("❌ Cannot reach the Hunyuan3D API server: {}", e);
            false
        }
    }
}

async fn check_stable_diffusion_health(client: &StableDiffusionClient) -> bool {
    match client.health().await {
        Ok(()) => {
            println!("✅ Stable Diffusion API server is running");
            true
        }
        Err(Hunyuan3dError::ApiError { status, .. }) => {
            println!("❌ Stable Diffusion API server returned an error - status code: {}", status);
            false
        }
        Err(e) => {
            println!("⚠️ Cannot reach the Stable Diffusion API server: {}", e);
            println!("   This is optional, the remaining checks can still run");
            false
        }
    }
}

async fn generate_test_image(client: &StableDiffusionClient, prompt: &str) -> Option<String> {
    match client.txt2img(&Txt2ImgRequest::new(prompt)).await {
        Ok(image) => {
            println!("✅ Image generated: {}", prompt);
            Some(image)
        }
        Err(Hunyuan3dError::NoImages) => {
            println!("❌ Image generation failed: no image data in the response");
            None
        }
        Err(Hunyuan3dError::ApiError { status, .. }) => {
            println!("❌ Image generation failed - status code: {}", status);
            None
        }
        Err(e) => {
            println!("❌ Image generation request failed: {}", e);
            None
        }
    }
}

async fn submit_generation(client: &Hunyuan3dClient, image: &str) -> Option<String> {
    match client.submit_job(&GenerationRequest::new(image)).await {
        Ok(uid) => {
            println!("✅ 3D generation job submitted - UID: {}", uid);
            Some(uid)
        }
        Err(Hunyuan3dError::MissingField(_)) => {
            println!("❌ 3D generation job submission failed: no UID in the response");
            None
        }
        Err(Hunyuan3dError::ApiError { status, .. }) => {
            println!("❌ 3D generation job submission failed - status code: {}", status);
            None
        }
        Err(e) => {
            println!("❌ 3D generation request failed: {}", e);
            None
        }
    }
}

fn report_wait_failure(error: &Hunyuan3dError) {
    match error {
        Hunyuan3dError::JobFailed { message, .. } => {
            println!("❌ 3D model generation failed: {}", message)
        }
        Hunyuan3dError::Timeout { waited, .. } => {
            println!("⏰ Timed out waiting ({} seconds)", waited.as_secs())
        }
        Hunyuan3dError::ApiError { status, .. } => {
            println!("❌ Status query failed - status code: {}", status)
        }
        other => println!("❌ Status query request failed: {}", other),
    }
}

fn print_summary() {
    println!("\n🎉 Integration test finished! Everything works");
    println!("\n📋 Summary:");
    println!("   ✅ Hunyuan3D API server is healthy");
    println!("   ✅ Stable Diffusion image generation works");
    println!("   ✅ 3D model generation works");
}
