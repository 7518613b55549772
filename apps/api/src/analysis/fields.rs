//! Structured field extraction from raw résumé text.
//!
//! `RuleBasedFieldExtractor` is the default backend: regexes for contact
//! details, a fixed vocabulary for skills, and heading detection for the
//! experience section. Absent fields come back as `None` or empty, never as
//! errors. Only blank text is treated as an unusable document.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::models::{CandidateRecord, DocumentMetadata, ExperienceItem};
use crate::errors::AppError;

pub trait FieldExtractor: Send + Sync {
    fn extract(
        &self,
        raw_text: &str,
        metadata: &DocumentMetadata,
    ) -> Result<CandidateRecord, AppError>;
}

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[\s.-]?)?(?:\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}|\d{5}[\s.-]?\d{5})")
        .unwrap()
});

/// Lowercase ASCII terms matched on word boundaries.
const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "kotlin",
    "swift",
    "ruby",
    "php",
    "scala",
    "c++",
    "c#",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    "spring",
    "web development",
    "machine learning",
    "deep learning",
    "data science",
    "data analysis",
    "artificial intelligence",
    "nlp",
    "tensorflow",
    "pytorch",
    "keras",
    "pandas",
    "numpy",
    "scikit-learn",
    "tableau",
    "excel",
    "power bi",
    "statistics",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "linux",
    "git",
    "android",
    "ios",
    "flutter",
    "figma",
    "communication",
    "leadership",
];

const EXPERIENCE_HEADINGS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "employment history",
    "work history",
];

/// Headings that end the experience section.
const OTHER_HEADINGS: &[&str] = &[
    "education",
    "skills",
    "technical skills",
    "projects",
    "objective",
    "career objective",
    "summary",
    "achievements",
    "awards",
    "certifications",
    "hobbies",
    "interests",
    "languages",
    "publications",
    "declaration",
    "references",
    "contact",
];

/// Only the top of the document is searched for the candidate's name.
const NAME_SEARCH_LINES: usize = 5;

pub struct RuleBasedFieldExtractor;

impl FieldExtractor for RuleBasedFieldExtractor {
    fn extract(
        &self,
        raw_text: &str,
        metadata: &DocumentMetadata,
    ) -> Result<CandidateRecord, AppError> {
        if raw_text.trim().is_empty() {
            return Err(AppError::ExtractionFailed(format!(
                "no text found in {}",
                metadata.file_name
            )));
        }

        Ok(CandidateRecord {
            name: extract_name(raw_text),
            email: EMAIL_REGEX.find(raw_text).map(|m| m.as_str().to_string()),
            phone: PHONE_REGEX
                .find(raw_text)
                .map(|m| m.as_str().trim().to_string()),
            skills: extract_skills(raw_text),
            experience_entries: extract_experience(raw_text),
            page_count: metadata.page_count,
        })
    }
}

fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(NAME_SEARCH_LINES)
        .find(|line| looks_like_name(line))
        .map(String::from)
}

fn looks_like_name(line: &str) -> bool {
    if heading_key(line).is_some() {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    (2..=4).contains(&words.len())
        && words.iter().all(|w| {
            w.chars()
                .all(|c| c.is_alphabetic() || matches!(c, '.' | '-' | '\''))
                && w.chars().any(char::is_alphabetic)
        })
}

fn extract_skills(text: &str) -> Vec<String> {
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();
    let mut found: Vec<(usize, &str)> = SKILL_VOCABULARY
        .iter()
        .filter_map(|term| {
            find_term(&lower, term)
                .map(|pos| (pos, &text[pos..pos + term.len()]))
        })
        .collect();
    found.sort_by_key(|(pos, _)| *pos);

    let mut seen = HashSet::new();
    found
        .into_iter()
        .filter(|(_, skill)| seen.insert(skill.to_lowercase()))
        .map(|(_, skill)| skill.to_string())
        .collect()
}

/// First occurrence of `term` not glued to a neighbouring word character.
fn find_term(haystack: &str, term: &str) -> Option<usize> {
    haystack.match_indices(term).map(|(i, _)| i).find(|&i| {
        let before = haystack[..i].chars().next_back();
        let after = haystack[i + term.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '+' | '#' | '_')
}

fn extract_experience(text: &str) -> Vec<ExperienceItem> {
    let mut in_section = false;
    let mut entries = Vec::new();

    for line in text.lines().map(str::trim) {
        match heading_key(line) {
            Some(key) if EXPERIENCE_HEADINGS.contains(&key.as_str()) => in_section = true,
            Some(_) => in_section = false,
            None if in_section && !line.is_empty() => {
                entries.push(ExperienceItem(line.to_string()))
            }
            None => {}
        }
    }
    entries
}

/// Normalized heading text if `line` is a known section heading.
fn heading_key(line: &str) -> Option<String> {
    let key = line.trim_end_matches(':').trim().to_lowercase();
    (EXPERIENCE_HEADINGS.contains(&key.as_str()) || OTHER_HEADINGS.contains(&key.as_str()))
        .then_some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\
Jane Q Doe
jane.doe@example.com | +1 (555) 123-4567

Career Objective
Ship reliable data products.

Skills
Python, SQL, TensorFlow, JavaScript

Work Experience:
Data Analyst, Acme Corp (2021-2023)
Intern, Globex (2020)

Education
B.Sc. Mathematics
";

    fn metadata(pages: u32) -> DocumentMetadata {
        DocumentMetadata {
            file_name: "jane.pdf".to_string(),
            page_count: pages,
        }
    }

    #[test]
    fn test_extracts_full_record() {
        let record = RuleBasedFieldExtractor.extract(RESUME, &metadata(2)).unwrap();
        assert_eq!(record.name.as_deref(), Some("Jane Q Doe"));
        assert_eq!(record.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(record.phone.as_deref(), Some("+1 (555) 123-4567"));
        assert_eq!(record.page_count, 2);
        assert_eq!(
            record.skills,
            vec!["Python", "SQL", "TensorFlow", "JavaScript"]
        );
        assert_eq!(
            record.experience_entries,
            vec![
                ExperienceItem("Data Analyst, Acme Corp (2021-2023)".to_string()),
                ExperienceItem("Intern, Globex (2020)".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_fields_are_none_not_errors() {
        let record = RuleBasedFieldExtractor
            .extract("lots of lowercase prose with no contact details 42", &metadata(1))
            .unwrap();
        assert!(record.name.is_none());
        assert!(record.email.is_none());
        assert!(record.phone.is_none());
        assert!(record.skills.is_empty());
        assert!(record.experience_entries.is_empty());
        assert_eq!(record.page_count, 1);
    }

    #[test]
    fn test_blank_text_is_extraction_failure() {
        let err = RuleBasedFieldExtractor
            .extract("  \n\t ", &metadata(1))
            .unwrap_err();
        assert!(matches!(err, AppError::ExtractionFailed(_)));
    }

    #[test]
    fn test_skill_boundaries() {
        let skills = extract_skills("MySQL and JavaScript, plus Java. Also Node.js!");
        assert_eq!(skills, vec!["MySQL", "JavaScript", "Java", "Node.js"]);
    }

    #[test]
    fn test_skills_deduplicated_keeping_first_casing() {
        let skills = extract_skills("PYTHON daily; python at night; Python forever");
        assert_eq!(skills, vec!["PYTHON"]);
    }

    #[test]
    fn test_common_words_are_not_skills() {
        let skills = extract_skills("Ready to go. Built the UI and UX in Figma");
        assert_eq!(skills, vec!["Figma"]);
    }

    #[test]
    fn test_multi_word_skill() {
        let skills = extract_skills("Focus: Web Development and Machine Learning");
        assert_eq!(skills, vec!["Web Development", "Machine Learning"]);
    }

    #[test]
    fn test_heading_is_not_a_name() {
        assert_eq!(
            extract_name("Career Objective\nJohn Smith"),
            Some("John Smith".to_string())
        );
    }

    #[test]
    fn test_indian_mobile_format() {
        let record = RuleBasedFieldExtractor
            .extract("Contact: +91 98765 43210", &metadata(1))
            .unwrap();
        assert_eq!(record.phone.as_deref(), Some("+91 98765 43210"));
    }

    #[test]
    fn test_experience_stops_at_next_heading() {
        let text = "EXPERIENCE\nA\nB\nC\nD\nPROJECTS\nNot experience";
        assert_eq!(extract_experience(text).len(), 4);
    }
}
