//! Skill classification — maps a skill list to one career track.
//!
//! Rules are evaluated top-down and the first match wins. A candidate listing
//! both "python" and "java" is always Data Science. New tracks are added by
//! appending to `TRACK_RULES`; order is part of the contract.

use crate::analysis::models::CareerTrack;

/// One ordered classification rule: trigger skill → track + skills to suggest.
#[derive(Debug, Clone, Copy)]
pub struct TrackRule {
    pub trigger: &'static str,
    pub track: CareerTrack,
    pub recommended_skills: &'static [&'static str],
}

impl TrackRule {
    /// Case-insensitive exact membership of the trigger in `skills`.
    pub fn matches(&self, skills: &[String]) -> bool {
        skills.iter().any(|s| s.to_lowercase() == self.trigger)
    }
}

pub const TRACK_RULES: &[TrackRule] = &[
    TrackRule {
        trigger: "python",
        track: CareerTrack::DataScience,
        recommended_skills: &["Machine Learning", "Data Science", "Artificial Intelligence"],
    },
    TrackRule {
        trigger: "java",
        track: CareerTrack::SoftwareDevelopment,
        recommended_skills: &["Java Development", "Spring Framework", "Web Development"],
    },
    TrackRule {
        trigger: "web development",
        track: CareerTrack::WebDevelopment,
        recommended_skills: &["HTML", "CSS", "JavaScript", "React", "Node.js"],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub track: CareerTrack,
    pub recommended_skills: Vec<String>,
}

pub fn classify(skills: &[String]) -> Classification {
    classify_with_rules(skills, TRACK_RULES)
}

pub fn classify_with_rules(skills: &[String], rules: &[TrackRule]) -> Classification {
    rules
        .iter()
        .find(|rule| rule.matches(skills))
        .map(|rule| Classification {
            track: rule.track,
            recommended_skills: rule
                .recommended_skills
                .iter()
                .map(|s| s.to_string())
                .collect(),
        })
        .unwrap_or(Classification {
            track: CareerTrack::Unknown,
            recommended_skills: vec![],
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_python_any_casing_is_data_science() {
        for variant in ["python", "Python", "PYTHON", "pYtHoN"] {
            let c = classify(&skills(&[variant, "Excel"]));
            assert_eq!(c.track, CareerTrack::DataScience, "variant {variant}");
        }
    }

    #[test]
    fn test_python_beats_java() {
        let c = classify(&skills(&["Java", "Python"]));
        assert_eq!(c.track, CareerTrack::DataScience);
    }

    #[test]
    fn test_java_is_software_development() {
        let c = classify(&skills(&["Java", "Web Development"]));
        assert_eq!(c.track, CareerTrack::SoftwareDevelopment);
        assert_eq!(
            c.recommended_skills,
            vec!["Java Development", "Spring Framework", "Web Development"]
        );
    }

    #[test]
    fn test_web_development_rule() {
        let c = classify(&skills(&["Web Development", "Figma"]));
        assert_eq!(c.track, CareerTrack::WebDevelopment);
        assert_eq!(c.recommended_skills.len(), 5);
    }

    #[test]
    fn test_membership_is_exact_not_substring() {
        let c = classify(&skills(&["JavaScript", "Python3"]));
        assert_eq!(c.track, CareerTrack::Unknown);
    }

    #[test]
    fn test_empty_skills_is_unknown() {
        let c = classify(&[]);
        assert_eq!(c.track, CareerTrack::Unknown);
        assert!(c.recommended_skills.is_empty());
    }

    #[test]
    fn test_python_sql_recommendations() {
        let c = classify(&skills(&["Python", "SQL"]));
        assert_eq!(
            c.recommended_skills,
            vec!["Machine Learning", "Data Science", "Artificial Intelligence"]
        );
    }

    #[test]
    fn test_custom_rule_order_is_respected() {
        let reversed: Vec<TrackRule> = TRACK_RULES.iter().rev().copied().collect();
        let c = classify_with_rules(&skills(&["python", "java"]), &reversed);
        assert_eq!(c.track, CareerTrack::SoftwareDevelopment);
    }
}
