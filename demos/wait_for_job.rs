//! This example waits for an already submitted job:
//! 1. Taking the job UID from the command line.
//! 2. Polling its status until it completes, fails or times out.
//! 3. Saving the model to a temporary directory if it completed.
//!
//! Usage:
//! `cargo run --example wait_for_job <UID>`

use hunyuan3d_probe::{save_model, Config, Hunyuan3dClient};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::from_env();
    let client = Hunyuan3dClient::new_with_url(&config.hunyuan3d_url)?;

    let uid = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Please provide a job UID as a command-line argument."))?;

    println!("\nWaiting for job `{}` to complete...", uid);
    let job = match client.wait_for_job(&uid, config.max_wait, true).await {
        Ok(job) => job,
        Err(e) => {
            eprintln!("\nJob did not complete: {}", e);
            return Ok(());
        }
    };

    let dest_dir = config
        .output_dir
        .unwrap_or_else(|| env::temp_dir().join("hunyuan3d_models"));
    match save_model(&job, &uid, &dest_dir).await {
        Ok(path) => println!("\nModel saved to {}", path.display()),
        Err(e) => eprintln!("\nJob completed but the model could not be saved: {}", e),
    }

    Ok(())
}
