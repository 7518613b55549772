//! Résumé → recommendation pipeline.
//!
//! Received → Extracted → Classified → Scored → Leveled → Assembled → Persisted | Failed
//!
//! Extraction failure ends the run with no record. Everything after extraction
//! is pure computation. Persistence is best-effort: a failed write is reported
//! alongside the result, never instead of it.

use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::analysis::classifier::classify;
use crate::analysis::courses::{clamp_course_count, pick_bonus_videos, recommend_courses};
use crate::analysis::extractor::DocumentTextExtractor;
use crate::analysis::fields::FieldExtractor;
use crate::analysis::models::{CandidateLevel, RecommendationResult, ResumeDocument};
use crate::analysis::persistence::{flatten_result, ResultSink};
use crate::analysis::scorer::{score_resume, ResumeSection};
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Received,
    Extracted,
    Classified,
    Scored,
    Leveled,
    Assembled,
    Persisted,
    Failed,
}

/// Terminal outcome of a run that got past extraction.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub result: RecommendationResult,
    pub stage: PipelineStage,
    pub persistence_error: Option<String>,
}

impl AnalysisOutcome {
    pub fn persisted(&self) -> bool {
        self.stage == PipelineStage::Persisted
    }
}

#[derive(Clone)]
pub struct RecommendationPipeline {
    text_extractor: Arc<dyn DocumentTextExtractor>,
    field_extractor: Arc<dyn FieldExtractor>,
    sink: Arc<dyn ResultSink>,
}

impl RecommendationPipeline {
    pub fn new(
        text_extractor: Arc<dyn DocumentTextExtractor>,
        field_extractor: Arc<dyn FieldExtractor>,
        sink: Arc<dyn ResultSink>,
    ) -> Self {
        Self {
            text_extractor,
            field_extractor,
            sink,
        }
    }

    /// Synchronous part of the run: extraction through assembly.
    /// `course_count` is clamped into [1, 10].
    pub fn analyze<R: Rng + ?Sized>(
        &self,
        document: &ResumeDocument,
        course_count: i64,
        rng: &mut R,
    ) -> Result<RecommendationResult, AppError> {
        debug!(stage = ?PipelineStage::Received, file = %document.file_name);

        let extracted = self.text_extractor.extract_text(document)?;
        let candidate = self
            .field_extractor
            .extract(&extracted.text, &extracted.metadata)?;
        debug!(
            stage = ?PipelineStage::Extracted,
            skills = candidate.skills.len(),
            experience = candidate.experience_entries.len()
        );

        let classification = classify(&candidate.skills);
        debug!(stage = ?PipelineStage::Classified, track = %classification.track);

        let score = score_resume(&extracted.text);
        debug!(
            stage = ?PipelineStage::Scored,
            score = score.total_score,
            has_projects = score.is_present(ResumeSection::Projects),
            missing = ?score.missing_sections()
        );

        let candidate_level =
            CandidateLevel::from_experience_count(candidate.experience_entries.len());
        debug!(stage = ?PipelineStage::Leveled, level = %candidate_level);

        let count = clamp_course_count(course_count);
        let selected_courses = recommend_courses(classification.track, count, rng);
        let bonus_videos = pick_bonus_videos(rng);

        let result = RecommendationResult {
            candidate,
            track: classification.track,
            recommended_skills: classification.recommended_skills,
            selected_courses,
            candidate_level,
            score,
            bonus_videos,
            timestamp: Utc::now(),
        };
        debug!(stage = ?PipelineStage::Assembled);
        Ok(result)
    }

    /// Writes the flattened result. Failure is logged and returned as a
    /// `Failed` outcome that still carries the result.
    pub async fn persist(&self, result: RecommendationResult) -> AnalysisOutcome {
        let row = flatten_result(&result);
        match self.sink.append(&row).await {
            Ok(()) => {
                info!(
                    "Persisted analysis for {} ({}, {})",
                    result.candidate.email.as_deref().unwrap_or("unknown email"),
                    result.track,
                    result.candidate_level
                );
                AnalysisOutcome {
                    result,
                    stage: PipelineStage::Persisted,
                    persistence_error: None,
                }
            }
            Err(e) => {
                let err = AppError::PersistenceFailed(e.to_string());
                warn!("{err}; returning unsaved result");
                AnalysisOutcome {
                    result,
                    stage: PipelineStage::Failed,
                    persistence_error: Some(err.to_string()),
                }
            }
        }
    }

    /// Full run. Extraction and analysis run on the blocking pool with a
    /// random source private to this invocation.
    pub async fn run(
        &self,
        document: ResumeDocument,
        course_count: i64,
    ) -> Result<AnalysisOutcome, AppError> {
        let pipeline = self.clone();
        let result = tokio::task::spawn_blocking(move || {
            let mut rng = StdRng::from_os_rng();
            pipeline.analyze(&document, course_count, &mut rng)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))?
        .inspect_err(|e| warn!(stage = ?PipelineStage::Failed, "Analysis failed: {e}"))?;

        Ok(self.persist(result).await)
    }

    pub fn sink(&self) -> &Arc<dyn ResultSink> {
        &self.sink
    }
}
