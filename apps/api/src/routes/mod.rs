pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Room for multipart boundaries and the small text fields.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate API
        .route("/api/v1/resumes/analyze", post(handlers::handle_analyze))
        // Admin reporting
        .route("/api/v1/admin/analyses", get(handlers::handle_list_analyses))
        .route(
            "/api/v1/admin/analyses.csv",
            get(handlers::handle_export_csv),
        )
        .route("/api/v1/admin/report", get(handlers::handle_report))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
