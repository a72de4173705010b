//! # briefcheck-pdf: Local Parsing Engine
//!
//! This crate provides the default [`PdfEngine`] implementation for the
//! `briefcheck` upload workflow, built on the pure-Rust `pdf` crate. Text is
//! collected from the content stream's draw operations; there is no OCR and
//! no layout reconstruction.
//!
//! The `pdf` crate resolves indirect objects through a resolver borrowed
//! from the loaded file, so the engine walks every page once at load time
//! and serves the page accessors from memory. Failures anywhere in that walk
//! surface as a load error carrying the parser's message.

use std::sync::OnceLock;

use async_trait::async_trait;
use briefcheck::engine::{EngineError, PdfDocument, PdfEngine, PdfPage, TextFragment};
use pdf::content::{Op, TextDrawAdjusted};
use pdf::file::FileOptions;
use tracing::{debug, warn};

/// A minimal single-page document used by [`init`] to verify the parser
/// backend once at startup.
const PROBE_PDF: &[u8] = b"%PDF-1.4\n\
    1 0 obj\n\
    << /Type /Catalog /Pages 2 0 R >>\n\
    endobj\n\
    2 0 obj\n\
    << /Type /Pages /Kids [3 0 R] /Count 1 >>\n\
    endobj\n\
    3 0 obj\n\
    << /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>\n\
    endobj\n\
    xref\n\
    0 4\n\
    0000000000 65535 f \n\
    0000000009 00000 n \n\
    0000000058 00000 n \n\
    0000000115 00000 n \n\
    trailer\n\
    << /Size 4 /Root 1 0 R >>\n\
    startxref\n\
    186\n\
    %%EOF";

static INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// One-time engine self-check, to be called once at application startup.
///
/// Parses a small embedded known-good document so that a broken parser
/// backend is reported here instead of on the user's first upload.
/// Idempotent: repeated calls return the first result without re-running
/// the check.
pub fn init() -> Result<(), EngineError> {
    INIT.get_or_init(|| {
        LocalPdfEngine::new()
            .load_sync(PROBE_PDF)
            .map(|_| ())
            .map_err(|e| e.to_string())
    })
    .clone()
    .map_err(EngineError::Init)
}

/// The [`PdfEngine`] implementation backed by the `pdf` crate.
#[derive(Debug, Clone, Default)]
pub struct LocalPdfEngine;

impl LocalPdfEngine {
    pub fn new() -> Self {
        Self
    }

    /// Parses the document and collects every page's fragments, in page
    /// order, short-circuiting on the first parser failure.
    fn load_sync(&self, data: &[u8]) -> Result<LocalPdfDocument, EngineError> {
        let file = FileOptions::cached()
            .load(data.to_vec())
            .map_err(|e| EngineError::Parse(e.to_string()))?;
        let resolver = file.resolver();

        let mut pages = Vec::with_capacity(file.num_pages() as usize);
        for page_num in 0..file.num_pages() {
            let page = file
                .get_page(page_num)
                .map_err(|e| EngineError::Parse(e.to_string()))?;

            let mut fragments = Vec::new();
            if let Some(content) = &page.contents {
                let operations = content
                    .operations(&resolver)
                    .map_err(|e| EngineError::Parse(e.to_string()))?;
                for op in operations.iter() {
                    match op {
                        Op::TextDraw { text } => {
                            fragments.push(TextFragment::new(text.to_string_lossy()));
                        }
                        Op::TextDrawAdjusted { array } => {
                            for item in array.iter() {
                                match item {
                                    TextDrawAdjusted::Text(text) => {
                                        fragments.push(TextFragment::new(text.to_string_lossy()));
                                    }
                                    // Spacing adjustments carry no extractable text.
                                    TextDrawAdjusted::Spacing(_) => {
                                        fragments.push(TextFragment::empty());
                                    }
                                }
                            }
                        }
                        _ => {}
                    }
                }
            } else {
                warn!("Page {} has no content stream.", page_num + 1);
            }
            pages.push(fragments);
        }

        Ok(LocalPdfDocument { pages })
    }
}

#[async_trait]
impl PdfEngine for LocalPdfEngine {
    async fn load(&self, data: &[u8]) -> Result<Box<dyn PdfDocument>, EngineError> {
        let document = self.load_sync(data)?;
        debug!("Loaded PDF with {} pages.", document.page_count());
        Ok(Box::new(document))
    }
}

struct LocalPdfDocument {
    pages: Vec<Vec<TextFragment>>,
}

#[async_trait]
impl PdfDocument for LocalPdfDocument {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    async fn page(&self, number: u32) -> Result<Box<dyn PdfPage>, EngineError> {
        let fragments = number
            .checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
            .cloned()
            .ok_or(EngineError::PageOutOfBounds(number))?;
        Ok(Box::new(LocalPdfPage { fragments }))
    }
}

struct LocalPdfPage {
    fragments: Vec<TextFragment>,
}

#[async_trait]
impl PdfPage for LocalPdfPage {
    async fn text_fragments(&self) -> Result<Vec<TextFragment>, EngineError> {
        Ok(self.fragments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_document_parses() {
        let engine = LocalPdfEngine::new();
        let document = engine.load_sync(PROBE_PDF).expect("probe must parse");
        assert_eq!(document.page_count(), 1);
    }

    #[test]
    fn test_garbage_bytes_fail_with_a_message() {
        let engine = LocalPdfEngine::new();
        let error = engine
            .load_sync(b"not a pdf at all")
            .err()
            .expect("garbage must not parse");
        assert!(!error.to_string().is_empty());
    }
}
