//! Axum route handlers for résumé analysis and admin reporting.

use std::path::{Path, PathBuf};

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::models::{RecommendationResult, ResumeDocument};
use crate::analysis::report::{rows_to_csv, summarize, ReportSummary};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::analysis::AnalysisRow;
use crate::state::AppState;

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: RecommendationResult,
    pub persisted: bool,
    pub persistence_error: Option<String>,
}

struct AnalyzeUpload {
    document: ResumeDocument,
    course_count: Option<i64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Multipart fields: `resume` (PDF file), optional `course_count`.
/// A failed write to storage does not fail the request.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_upload(multipart, state.config.max_upload_bytes).await?;
    store_upload(&state.config.upload_dir, &upload.document).await;

    let course_count = upload
        .course_count
        .unwrap_or(state.config.default_course_count as i64);
    let outcome = state.pipeline.run(upload.document, course_count).await?;

    Ok(Json(AnalyzeResponse {
        persisted: outcome.persisted(),
        persistence_error: outcome.persistence_error,
        result: outcome.result,
    }))
}

/// GET /api/v1/admin/analyses
pub async fn handle_list_analyses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<AnalysisRow>>, AppError> {
    require_admin(&headers, &state.config)?;
    Ok(Json(load_rows(&state).await?))
}

/// GET /api/v1/admin/report
///
/// Counts per predicted field and per user level.
pub async fn handle_report(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ReportSummary>, AppError> {
    require_admin(&headers, &state.config)?;
    let rows = load_rows(&state).await?;
    Ok(Json(summarize(&rows)))
}

/// GET /api/v1/admin/analyses.csv
pub async fn handle_export_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&headers, &state.config)?;
    let rows = load_rows(&state).await?;
    let body = rows_to_csv(&rows)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"User_Data.csv\"",
            ),
        ],
        body,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn require_admin(headers: &HeaderMap, config: &Config) -> Result<(), AppError> {
    let Some(expected) = config.admin_token.as_deref() else {
        return Ok(());
    };
    let provided = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    if provided == Some(expected) {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

async fn load_rows(state: &AppState) -> Result<Vec<AnalysisRow>, AppError> {
    state
        .pipeline
        .sink()
        .read_all()
        .await
        .map_err(|e| AppError::PersistenceFailed(e.to_string()))
}

async fn read_upload(
    mut multipart: Multipart,
    max_bytes: usize,
) -> Result<AnalyzeUpload, AppError> {
    let mut document = None;
    let mut course_count = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Invalid multipart body", e, max_bytes))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                validate_file_name(&file_name)?;
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Failed to read upload", e, max_bytes))?;
                if bytes.len() > max_bytes {
                    return Err(AppError::PayloadTooLarge(format!(
                        "Resume exceeds {max_bytes} bytes"
                    )));
                }
                document = Some(ResumeDocument::new(file_name, bytes));
            }
            "course_count" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Failed to read course_count", e, max_bytes))?;
                let count = text.trim().parse::<i64>().map_err(|_| {
                    AppError::Validation(format!("course_count must be an integer, got '{text}'"))
                })?;
                course_count = Some(count);
            }
            _ => {}
        }
    }

    let document =
        document.ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;
    Ok(AnalyzeUpload {
        document,
        course_count,
    })
}

/// Body-limit rejections stay 413; anything else is a malformed request.
fn multipart_error(context: &str, err: MultipartError, max_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Resume exceeds {max_bytes} bytes"))
    } else {
        AppError::Validation(format!("{context}: {err}"))
    }
}

fn validate_file_name(file_name: &str) -> Result<(), AppError> {
    let is_pdf = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Only PDF resumes are accepted, got '{file_name}'"
        )))
    }
}

/// Copies the upload under `dir`. Failures are logged and ignored.
async fn store_upload(dir: &Path, document: &ResumeDocument) {
    let path = upload_path(dir, &document.file_name);
    let write = async {
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&path, &document.bytes).await
    };
    match write.await {
        Ok(()) => info!("Stored upload at {}", path.display()),
        Err(e) => warn!("Could not store upload {}: {e}", path.display()),
    }
}

fn upload_path(dir: &Path, file_name: &str) -> PathBuf {
    // Only the final component; client-supplied directories are dropped.
    let base = Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume.pdf");
    dir.join(format!("{}-{}", Uuid::new_v4(), base))
}
