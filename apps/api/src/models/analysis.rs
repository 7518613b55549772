use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted analysis, as read back for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct AnalysisRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub resume_score: i32,
    pub timestamp: String,
    pub page_count: i32,
    pub predicted_field: String,
    pub user_level: String,
    pub actual_skills: String,
    pub recommended_skills: String,
    pub recommended_courses: String,
    pub created_at: DateTime<Utc>,
}

/// Flattened analysis ready for the sink. List columns are already joined and
/// truncated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAnalysisRow {
    pub name: Option<String>,
    pub email: Option<String>,
    pub resume_score: i32,
    pub timestamp: String,
    pub page_count: i32,
    pub predicted_field: String,
    pub user_level: String,
    pub actual_skills: String,
    pub recommended_skills: String,
    pub recommended_courses: String,
}
