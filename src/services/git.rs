use crate::errors::ApiError;
use log::info;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Shallow, single-branch clone of `url` into `dest` via the external
/// git client. Non-zero exit surfaces git's own stderr diagnostic; there
/// are no retries. Credentials are whatever git resolves from the
/// ambient environment.
pub async fn clone_shallow(url: &str, dest: &Path, limit: Duration) -> Result<(), ApiError> {
    info!("Cloning {} into {}", url, dest.display());

    let output = timeout(
        limit,
        Command::new("git")
            .args(["clone", "--depth", "1", "--single-branch", url])
            .arg(dest)
            .output(),
    )
    .await
    .map_err(|_| ApiError::Timeout {
        tool: "git clone",
        secs: limit.as_secs(),
    })?
    .map_err(|e| ApiError::Clone(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ApiError::Clone(stderr));
    }

    Ok(())
}
