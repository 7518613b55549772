use std::fmt;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::scorer::ScoreBreakdown;

/// An uploaded résumé as received from the client.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

impl ResumeDocument {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Facts about the physical document, independent of its text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_name: String,
    pub page_count: u32,
}

/// One line of the experience section. The pipeline only ever counts these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperienceItem(pub String);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// In order of first appearance, casing as found in the document.
    pub skills: Vec<String>,
    pub experience_entries: Vec<ExperienceItem>,
    pub page_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerTrack {
    DataScience,
    SoftwareDevelopment,
    WebDevelopment,
    Unknown,
}

impl CareerTrack {
    pub fn label(&self) -> &'static str {
        match self {
            CareerTrack::DataScience => "Data Science",
            CareerTrack::SoftwareDevelopment => "Software Development",
            CareerTrack::WebDevelopment => "Web Development",
            CareerTrack::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CareerTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CandidateLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl CandidateLevel {
    /// 0 entries → Beginner, 1–3 → Intermediate, 4+ → Expert.
    pub fn from_experience_count(count: usize) -> Self {
        match count {
            0 => CandidateLevel::Beginner,
            1..=3 => CandidateLevel::Intermediate,
            _ => CandidateLevel::Expert,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CandidateLevel::Beginner => "Beginner",
            CandidateLevel::Intermediate => "Intermediate",
            CandidateLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for CandidateLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BonusVideos {
    pub resume_video: Option<String>,
    pub interview_video: Option<String>,
}

/// Everything one analysis run produced. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub candidate: CandidateRecord,
    pub track: CareerTrack,
    pub recommended_skills: Vec<String>,
    pub selected_courses: Vec<Course>,
    pub candidate_level: CandidateLevel,
    pub score: ScoreBreakdown,
    pub bonus_videos: BonusVideos,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(CandidateLevel::from_experience_count(0), CandidateLevel::Beginner);
        assert_eq!(CandidateLevel::from_experience_count(1), CandidateLevel::Intermediate);
        assert_eq!(CandidateLevel::from_experience_count(3), CandidateLevel::Intermediate);
        assert_eq!(CandidateLevel::from_experience_count(4), CandidateLevel::Expert);
        assert_eq!(CandidateLevel::from_experience_count(40), CandidateLevel::Expert);
    }

    #[test]
    fn test_track_labels_match_reporting_names() {
        assert_eq!(CareerTrack::DataScience.to_string(), "Data Science");
        assert_eq!(CareerTrack::SoftwareDevelopment.to_string(), "Software Development");
        assert_eq!(CareerTrack::WebDevelopment.to_string(), "Web Development");
        assert_eq!(CareerTrack::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_experience_item_serializes_as_plain_string() {
        let item = ExperienceItem("Engineer at Acme".to_string());
        assert_eq!(serde_json::to_string(&item).unwrap(), "\"Engineer at Acme\"");
    }
}
