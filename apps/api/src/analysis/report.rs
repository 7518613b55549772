//! Admin reporting over persisted analyses: counts per track and level, and
//! a CSV export of every row.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub by_track: BTreeMap<String, usize>,
    pub by_level: BTreeMap<String, usize>,
}

pub fn summarize(rows: &[AnalysisRow]) -> ReportSummary {
    let mut summary = ReportSummary {
        total: rows.len(),
        ..Default::default()
    };
    for row in rows {
        *summary
            .by_track
            .entry(row.predicted_field.clone())
            .or_default() += 1;
        *summary.by_level.entry(row.user_level.clone()).or_default() += 1;
    }
    summary
}

const CSV_HEADER: &[&str] = &[
    "ID",
    "Name",
    "Email",
    "Resume Score",
    "Timestamp",
    "Total Page",
    "Predicted Field",
    "User Level",
    "Actual Skills",
    "Recommended Skills",
    "Recommended Course",
];

pub fn rows_to_csv(rows: &[AnalysisRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.write_record([
            row.id.to_string(),
            row.name.clone().unwrap_or_default(),
            row.email.clone().unwrap_or_default(),
            row.resume_score.to_string(),
            row.timestamp.clone(),
            row.page_count.to_string(),
            row.predicted_field.clone(),
            row.user_level.clone(),
            row.actual_skills.clone(),
            row.recommended_skills.clone(),
            row.recommended_courses.clone(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("CSV export failed: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}
