//! Append-only storage of analysis results.
//!
//! Pipeline code only sees `ResultSink`; the Postgres table is one backend.
//! Rows are flattened and truncated before they reach a sink.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::info;

use crate::analysis::models::RecommendationResult;
use crate::models::analysis::{AnalysisRow, NewAnalysisRow};

/// Column limit for the list-valued fields.
pub const MAX_LIST_COLUMN_CHARS: usize = 1000;

const LIST_DELIMITER: &str = ", ";

#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn append(&self, row: &NewAnalysisRow) -> Result<()>;
    async fn read_all(&self) -> Result<Vec<AnalysisRow>>;
}

/// Keeps at most `max_chars` characters. Never fails.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value.to_string(),
    }
}

fn list_column<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(LIST_DELIMITER);
    truncate_chars(&joined, MAX_LIST_COLUMN_CHARS)
}

/// Flattens a result into the persisted row shape.
pub fn flatten_result(result: &RecommendationResult) -> NewAnalysisRow {
    NewAnalysisRow {
        name: result.candidate.name.clone(),
        email: result.candidate.email.clone(),
        resume_score: result.score.total_score as i32,
        timestamp: result
            .timestamp
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        page_count: result.candidate.page_count as i32,
        predicted_field: result.track.label().to_string(),
        user_level: result.candidate_level.label().to_string(),
        actual_skills: list_column(&result.candidate.skills),
        recommended_skills: list_column(&result.recommended_skills),
        recommended_courses: list_column(result.selected_courses.iter().map(|c| &c.name)),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres
// ────────────────────────────────────────────────────────────────────────────

pub struct PgResultSink {
    pool: PgPool,
}

impl PgResultSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultSink for PgResultSink {
    async fn append(&self, row: &NewAnalysisRow) -> Result<()> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO resume_data
                (name, email, resume_score, timestamp, page_count, predicted_field,
                 user_level, actual_skills, recommended_skills, recommended_courses)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&row.name)
        .bind(&row.email)
        .bind(row.resume_score)
        .bind(&row.timestamp)
        .bind(row.page_count)
        .bind(&row.predicted_field)
        .bind(&row.user_level)
        .bind(&row.actual_skills)
        .bind(&row.recommended_skills)
        .bind(&row.recommended_courses)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted resume_data row {id}");
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<AnalysisRow>> {
        Ok(
            sqlx::query_as::<_, AnalysisRow>("SELECT * FROM resume_data ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryResultSink {
    rows: RwLock<Vec<AnalysisRow>>,
}

impl MemoryResultSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultSink for MemoryResultSink {
    async fn append(&self, row: &NewAnalysisRow) -> Result<()> {
        let NewAnalysisRow {
            name,
            email,
            resume_score,
            timestamp,
            page_count,
            predicted_field,
            user_level,
            actual_skills,
            recommended_skills,
            recommended_courses,
        } = row.clone();

        // Id assigned under the lock so ids follow row order.
        let mut rows = self.rows.write().await;
        let id = rows.len() as i64 + 1;
        rows.push(AnalysisRow {
            id,
            name,
            email,
            resume_score,
            timestamp,
            page_count,
            predicted_field,
            user_level,
            actual_skills,
            recommended_skills,
            recommended_courses,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<AnalysisRow>> {
        Ok(self.rows.read().await.clone())
    }
}

/// Sink that rejects every write. Exercises the best-effort persistence path.
#[cfg(test)]
pub struct FailingResultSink;

#[cfg(test)]
#[async_trait]
impl ResultSink for FailingResultSink {
    async fn append(&self, _row: &NewAnalysisRow) -> Result<()> {
        anyhow::bail!("sink unavailable")
    }

    async fn read_all(&self) -> Result<Vec<AnalysisRow>> {
        anyhow::bail!("sink unavailable")
    }
}
