//! Document text extraction. PDF text comes from pdf-extract; the physical
//! page count comes from lopdf.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::analysis::models::{DocumentMetadata, ResumeDocument};
use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// Converts a binary document into plain text. Blocking; callers on the async
/// runtime should run it on `spawn_blocking`.
pub trait DocumentTextExtractor: Send + Sync {
    fn extract_text(&self, document: &ResumeDocument) -> Result<ExtractedText, AppError>;
}

pub struct PdfTextExtractor;

impl DocumentTextExtractor for PdfTextExtractor {
    fn extract_text(&self, document: &ResumeDocument) -> Result<ExtractedText, AppError> {
        debug!(
            "Extracting text from {} ({} bytes)",
            document.file_name,
            document.bytes.len()
        );

        let pdf = lopdf::Document::load_mem(&document.bytes).map_err(|e| {
            warn!("Failed to load PDF {}: {e}", document.file_name);
            AppError::ExtractionFailed(format!("unreadable PDF: {e}"))
        })?;
        let page_count = pdf.get_pages().len() as u32;

        // pdf-extract panics on some structurally valid but inconsistent PDFs.
        let text = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&document.bytes)
        }))
        .map_err(|_| {
            warn!("Text extraction panicked on {}", document.file_name);
            AppError::ExtractionFailed("text extraction aborted on malformed PDF".to_string())
        })?
        .map_err(|e| {
            warn!("Failed to extract text from {}: {e}", document.file_name);
            AppError::ExtractionFailed(format!("text extraction failed: {e}"))
        })?;

        Ok(ExtractedText {
            text,
            metadata: DocumentMetadata {
                file_name: document.file_name.clone(),
                page_count,
            },
        })
    }
}

/// Test double that hands back fixed text without touching a real PDF.
#[cfg(test)]
pub struct StaticTextExtractor {
    pub text: String,
    pub page_count: u32,
}

#[cfg(test)]
impl DocumentTextExtractor for StaticTextExtractor {
    fn extract_text(&self, document: &ResumeDocument) -> Result<ExtractedText, AppError> {
        Ok(ExtractedText {
            text: self.text.clone(),
            metadata: DocumentMetadata {
                file_name: document.file_name.clone(),
                page_count: self.page_count,
            },
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    use super::*;

    /// One page whose content stream selects `/F1` without any `/Resources`.
    pub(crate) fn pdf_with_undeclared_font() -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal("Jane Doe")]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_garbage_bytes_fail_extraction() {
        let doc = ResumeDocument::new("resume.pdf", b"definitely not a pdf".to_vec());
        let err = PdfTextExtractor.extract_text(&doc).unwrap_err();
        assert!(matches!(err, AppError::ExtractionFailed(_)));
    }

    #[test]
    fn test_empty_upload_fails_extraction() {
        let doc = ResumeDocument::new("resume.pdf", Vec::<u8>::new());
        assert!(matches!(
            PdfTextExtractor.extract_text(&doc),
            Err(AppError::ExtractionFailed(_))
        ));
    }

    #[test]
    fn test_undeclared_font_fails_extraction() {
        let doc = ResumeDocument::new("resume.pdf", pdf_with_undeclared_font());
        assert!(matches!(
            PdfTextExtractor.extract_text(&doc),
            Err(AppError::ExtractionFailed(_))
        ));
    }
}
