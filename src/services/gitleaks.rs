use crate::errors::ApiError;
use crate::models::scan::{SecretReport, SecretSummary};
use crate::utils::text::{commits_scanned, data_scanned_kb, strip_ansi};
use log::{debug, info};
use serde_json::Value;
use std::io;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

const NO_LEAKS_PHRASE: &str = "no leaks found";
const LEAKS_PHRASE: &str = "leaks found";

/// Runs gitleaks against a checked-out tree and normalizes whatever it
/// produced. A missing binary is its own error, distinct from a clone
/// failure and from a clean scan.
pub async fn scan_secrets(dir: &Path, limit: Duration) -> Result<SecretReport, ApiError> {
    info!("Running gitleaks against {}", dir.display());

    let result = timeout(
        limit,
        Command::new("gitleaks")
            .args(["detect", "--source"])
            .arg(dir)
            .args(["--report-format", "json", "--no-banner"])
            .output(),
    )
    .await
    .map_err(|_| ApiError::Timeout {
        tool: "gitleaks",
        secs: limit.as_secs(),
    })?;

    let output = match result {
        Ok(output) => output,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ApiError::DetectorMissing),
        Err(e) => return Err(ApiError::Detector(e.to_string())),
    };

    let stdout = strip_ansi(String::from_utf8_lossy(&output.stdout).trim());
    let stderr = strip_ansi(String::from_utf8_lossy(&output.stderr).trim());
    debug!("gitleaks exit {:?}, {} bytes stdout", output.status.code(), stdout.len());

    Ok(interpret_output(&stdout, &stderr))
}

/// Prefers a structured JSON findings array on stdout; anything else
/// (empty, malformed, or non-array) falls back to summarizing the
/// diagnostic text.
pub fn interpret_output(stdout: &str, stderr: &str) -> SecretReport {
    if !stdout.is_empty() {
        if let Ok(Value::Array(findings)) = serde_json::from_str(stdout) {
            return SecretReport {
                summary: SecretSummary::Structured {
                    leaks_found: !findings.is_empty(),
                    total_findings: findings.len(),
                },
                findings,
            };
        }
    }

    let text = if stderr.is_empty() { stdout } else { stderr };
    let lowered = text.to_lowercase();

    // "no leaks found" contains "leaks found", so it must win.
    let leaks_found = if lowered.contains(NO_LEAKS_PHRASE) {
        Some(false)
    } else if lowered.contains(LEAKS_PHRASE) {
        Some(true)
    } else {
        None
    };

    SecretReport {
        summary: SecretSummary::Summarized {
            leaks_found,
            commits_scanned: commits_scanned(text),
            data_scanned_kb: data_scanned_kb(text),
            message: text.trim().to_string(),
        },
        findings: Vec::new(),
    }
}
