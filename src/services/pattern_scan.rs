use crate::errors::ApiError;
use crate::models::scan::{CODE_STATUS_CLEAN, CODE_STATUS_FLAGGED, PatternIssue};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Substring-scans every regular file under `root` against the
/// configured patterns. An empty pattern list is a caller
/// misconfiguration, not a clean scan. Unreadable files are skipped and
/// the walk continues; file contents decode permissively so binary junk
/// never aborts a scan.
pub fn scan_patterns(
    root: &Path,
    patterns: &[String],
) -> Result<(Vec<PatternIssue>, &'static str), ApiError> {
    if patterns.is_empty() {
        return Err(ApiError::NoPatterns);
    }

    let mut issues = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(bytes) = fs::read(entry.path()) else {
            continue;
        };
        let content = String::from_utf8_lossy(&bytes);
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .into_owned();

        for (index, line) in content.lines().enumerate() {
            for pattern in patterns {
                if line.contains(pattern.as_str()) {
                    issues.push(PatternIssue {
                        file: relative.clone(),
                        line: index + 1,
                        pattern: pattern.clone(),
                        content: line.trim().to_string(),
                    });
                }
            }
        }
    }

    debug!("Pattern scan of {} produced {} issues", root.display(), issues.len());

    let status = if issues.is_empty() {
        CODE_STATUS_CLEAN
    } else {
        CODE_STATUS_FLAGGED
    };
    Ok((issues, status))
}
