use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SCAN_TYPE_SECRETS: &str = "secrets";
pub const SCAN_TYPE_CODE: &str = "code";

pub const SECRET_STATUS_COMPLETED: &str = "completed";

/// Exact sentinels; consumers compare these by string equality.
pub const CODE_STATUS_CLEAN: &str = "Valid!";
pub const CODE_STATUS_FLAGGED: &str = "Invalid!!";

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub url: String,
}

/// One forbidden-substring hit from the in-process scanner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternIssue {
    pub file: String,
    pub line: usize,
    pub pattern: String,
    pub content: String,
}

/// Outcome of interpreting the secret detector's output. `Structured`
/// carries counts derived from a parsed findings array; `Summarized` is
/// the freeform-diagnostics path. Serialized untagged so each arm keeps
/// its own wire layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SecretSummary {
    Structured {
        leaks_found: bool,
        total_findings: usize,
    },
    Summarized {
        leaks_found: Option<bool>,
        commits_scanned: Option<u64>,
        data_scanned_kb: Option<f64>,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct SecretReport {
    pub summary: SecretSummary,
    pub findings: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct SecretScanReport {
    pub repository: String,
    pub scan_type: &'static str,
    pub status: &'static str,
    pub summary: SecretSummary,
    pub findings: Vec<Value>,
}

impl SecretScanReport {
    pub fn new(repository: String, report: SecretReport) -> Self {
        Self {
            repository,
            scan_type: SCAN_TYPE_SECRETS,
            status: SECRET_STATUS_COMPLETED,
            summary: report.summary,
            findings: report.findings,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CodeScanReport {
    pub repository: String,
    pub scan_type: &'static str,
    pub status: &'static str,
    pub issues: Vec<PatternIssue>,
}

impl CodeScanReport {
    pub fn new(repository: String, status: &'static str, issues: Vec<PatternIssue>) -> Self {
        Self {
            repository,
            scan_type: SCAN_TYPE_CODE,
            status,
            issues,
        }
    }
}
