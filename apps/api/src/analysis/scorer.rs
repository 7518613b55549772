//! Résumé writing score: presence of five fixed section names, 20 points each.
//!
//! Detection is a case-sensitive substring test over the whole text. The word
//! "Objective" anywhere in the résumé counts as an Objective section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResumeSection {
    Objective,
    Declaration,
    Hobbies,
    Achievements,
    Projects,
}

impl ResumeSection {
    pub fn keyword(&self) -> &'static str {
        match self {
            ResumeSection::Objective => "Objective",
            ResumeSection::Declaration => "Declaration",
            ResumeSection::Hobbies => "Hobbies",
            ResumeSection::Achievements => "Achievements",
            ResumeSection::Projects => "Projects",
        }
    }
}

/// Sections in scoring order with their point value.
pub const SECTION_WEIGHTS: &[(ResumeSection, u32)] = &[
    (ResumeSection::Objective, 20),
    (ResumeSection::Declaration, 20),
    (ResumeSection::Hobbies, 20),
    (ResumeSection::Achievements, 20),
    (ResumeSection::Projects, 20),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCheck {
    pub section: ResumeSection,
    pub present: bool,
    pub points: u32,
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub sections: Vec<SectionCheck>,
    pub total_score: u32,
}

impl ScoreBreakdown {
    pub fn is_present(&self, section: ResumeSection) -> bool {
        self.sections.iter().any(|c| c.section == section && c.present)
    }

    pub fn missing_sections(&self) -> Vec<ResumeSection> {
        self.sections
            .iter()
            .filter(|c| !c.present)
            .map(|c| c.section)
            .collect()
    }
}

pub fn score_resume(raw_text: &str) -> ScoreBreakdown {
    let mut total_score = 0;
    let sections = SECTION_WEIGHTS
        .iter()
        .map(|&(section, weight)| {
            let keyword = section.keyword();
            let present = raw_text.contains(keyword);
            let (points, tip) = if present {
                (weight, format!("You have added {keyword}."))
            } else {
                (0, format!("Please add {keyword} to improve your resume."))
            };
            total_score += points;
            SectionCheck {
                section,
                present,
                points,
                tip,
            }
        })
        .collect();

    ScoreBreakdown {
        sections,
        total_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_and_projects_score_40() {
        let text = "Career Objective\nBuild things.\n\nProjects\n- A compiler";
        let breakdown = score_resume(text);
        assert_eq!(breakdown.total_score, 40);
        assert!(breakdown.is_present(ResumeSection::Objective));
        assert!(breakdown.is_present(ResumeSection::Projects));
        assert_eq!(
            breakdown.missing_sections(),
            vec![
                ResumeSection::Declaration,
                ResumeSection::Hobbies,
                ResumeSection::Achievements
            ]
        );
    }

    #[test]
    fn test_empty_text_scores_zero_with_tips() {
        let breakdown = score_resume("");
        assert_eq!(breakdown.total_score, 0);
        assert_eq!(breakdown.sections.len(), 5);
        assert_eq!(
            breakdown.sections[1].tip,
            "Please add Declaration to improve your resume."
        );
    }

    #[test]
    fn test_all_sections_score_100() {
        let breakdown = score_resume("Objective Declaration Hobbies Achievements Projects");
        assert_eq!(breakdown.total_score, 100);
        assert!(breakdown.missing_sections().is_empty());
        assert_eq!(breakdown.sections[0].tip, "You have added Objective.");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let breakdown = score_resume("objective PROJECTS hobbies");
        assert_eq!(breakdown.total_score, 0);
    }

    #[test]
    fn test_substring_anywhere_counts() {
        // Not a heading, still counts.
        let breakdown = score_resume("My main Objectives were met.");
        assert!(breakdown.is_present(ResumeSection::Objective));
        assert_eq!(breakdown.total_score, 20);
    }

    #[test]
    fn test_adding_keyword_never_lowers_score() {
        let mut text = String::from("Summary of work");
        let mut previous = score_resume(&text).total_score;
        for (section, _) in SECTION_WEIGHTS {
            text.push(' ');
            text.push_str(section.keyword());
            let current = score_resume(&text).total_score;
            assert!(current >= previous, "{current} < {previous}");
            assert!([0, 20, 40, 60, 80, 100].contains(&current));
            previous = current;
        }
        assert_eq!(previous, 100);
    }
}
