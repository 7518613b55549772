// Résumé analysis: text extraction, field extraction, skill classification,
// scoring, course recommendation, persistence and admin reporting.

pub mod catalog;
pub mod classifier;
pub mod courses;
pub mod extractor;
pub mod fields;
pub mod handlers;
pub mod models;
pub mod persistence;
pub mod pipeline;
pub mod report;
pub mod scorer;
