use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Request-level failures. Each variant renders as a JSON body
/// `{"error": <message>}` with the status from `status_code`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing 'url' field")]
    MissingUrl,

    #[error("No search patterns loaded from config")]
    NoPatterns,

    #[error("Failed to clone repo: {0}")]
    Clone(String),

    #[error("Gitleaks not installed or not in PATH")]
    DetectorMissing,

    #[error("Gitleaks execution failed: {0}")]
    Detector(String),

    #[error("{tool} timed out after {secs}s")]
    Timeout { tool: &'static str, secs: u64 },

    #[error("Failed to create workspace: {0}")]
    Workspace(#[from] std::io::Error),

    #[error("Scan task failed: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
