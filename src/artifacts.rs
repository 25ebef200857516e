use crate::error::Hunyuan3dError;
use crate::types::JobStatus;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Writes the model of a completed job to `<dest_dir>/<uid>.glb`.
///
/// The destination directory is created if needed.
///
/// # Errors
///
/// - `Hunyuan3dError::MissingField("model_base64")` if the status carries no model.
/// - `Hunyuan3dError::InvalidBase64` if the payload cannot be decoded.
/// - `Hunyuan3dError::IoError` if the file cannot be written.
pub async fn save_model<P: AsRef<Path>>(
    job: &JobStatus,
    uid: &str,
    dest_dir: P,
) -> Result<PathBuf, Hunyuan3dError> {
    let payload = job
        .model_base64
        .as_deref()
        .ok_or(Hunyuan3dError::MissingField("model_base64"))?;
    write_base64(payload, dest_dir.as_ref(), &format!("{}.glb", uid)).await
}

/// Writes a base64-encoded image to `<dest_dir>/<name>.png`.
///
/// A `data:` URL prefix, as some WebUI builds return, is stripped first.
pub async fn save_image<P: AsRef<Path>>(
    image_base64: &str,
    dest_dir: P,
    name: &str,
) -> Result<PathBuf, Hunyuan3dError> {
    let payload = match image_base64.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(rest, |(_, data)| data),
        None => image_base64,
    };
    write_base64(payload, dest_dir.as_ref(), &format!("{}.png", name)).await
}

async fn write_base64(
    payload: &str,
    dest_dir: &Path,
    file_name: &str,
) -> Result<PathBuf, Hunyuan3dError> {
    let content = BASE64.decode(payload.trim())?;

    fs::create_dir_all(dest_dir).await?;
    let file_path = dest_dir.join(file_name);
    let mut file = fs::File::create(&file_path).await?;
    file.write_all(&content).await?;
    file.flush().await?;

    info!(path = %file_path.display(), bytes = content.len(), "artifact saved");
    Ok(file_path)
}
