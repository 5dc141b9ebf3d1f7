use crate::config::RuntimeConfig;
use crate::errors::ApiError;
use crate::models::scan::{CodeScanReport, ScanRequest, SecretScanReport};
use crate::services::{git, gitleaks, pattern_scan};
use crate::services::workspace::Workspace;
use actix_web::{HttpResponse, web};
use log::info;

pub struct AppState {
    pub config: RuntimeConfig,
}

/// A missing, empty, or unparseable `url` is the same client error.
fn parse_scan_request(body: &web::Bytes) -> Result<ScanRequest, ApiError> {
    let request: ScanRequest =
        serde_json::from_slice(body).map_err(|_| ApiError::MissingUrl)?;
    if request.url.trim().is_empty() {
        return Err(ApiError::MissingUrl);
    }
    Ok(request)
}

pub async fn scan_secrets(
    body: web::Bytes,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let request = parse_scan_request(&body)?;
    info!("Secret scan requested for {}", request.url);

    let workspace = Workspace::acquire()?;
    git::clone_shallow(&request.url, workspace.path(), data.config.command_timeout).await?;

    let report = gitleaks::scan_secrets(workspace.path(), data.config.command_timeout).await?;

    Ok(HttpResponse::Ok().json(SecretScanReport::new(request.url, report)))
}

pub async fn scan_code(
    body: web::Bytes,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let request = parse_scan_request(&body)?;
    info!("Code scan requested for {}", request.url);

    // Pattern config is validated before any clone happens.
    let patterns = data.config.search_patterns.clone();
    if patterns.is_empty() {
        return Err(ApiError::NoPatterns);
    }

    let workspace = Workspace::acquire()?;
    git::clone_shallow(&request.url, workspace.path(), data.config.command_timeout).await?;

    let root = workspace.path().to_path_buf();
    let (issues, status) = web::block(move || pattern_scan::scan_patterns(&root, &patterns))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(CodeScanReport::new(request.url, status, issues)))
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "repoguard"
    }))
}
