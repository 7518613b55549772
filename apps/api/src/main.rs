mod analysis;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::extractor::PdfTextExtractor;
use crate::analysis::fields::RuleBasedFieldExtractor;
use crate::analysis::persistence::{MemoryResultSink, PgResultSink, ResultSink};
use crate::analysis::pipeline::RecommendationPipeline;
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL, or keep rows in memory when no database is configured
    let sink: Arc<dyn ResultSink> = match &config.database_url {
        Some(url) => Arc::new(PgResultSink::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL not set; analyses are kept in memory and lost on restart");
            Arc::new(MemoryResultSink::new())
        }
    };

    // PDF text + rule-based fields; swap either extractor without touching handlers
    let pipeline = RecommendationPipeline::new(
        Arc::new(PdfTextExtractor),
        Arc::new(RuleBasedFieldExtractor),
        sink,
    );
    info!(
        "Pipeline ready (default courses: {}, upload dir: {})",
        config.default_course_count,
        config.upload_dir.display()
    );

    let state = AppState {
        config: config.clone(),
        pipeline,
    };

    // Build router
    // TODO: restrict CORS origins once the upload UI has a fixed host
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
