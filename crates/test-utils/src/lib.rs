//! # Shared Test Helpers
//!
//! A scriptable mock parsing engine for controller tests, plus (behind the
//! `pdf` feature) a generator for real PDF bytes used by the integration
//! tests of the `briefcheck-pdf` engine.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use briefcheck::engine::{EngineError, PdfDocument, PdfEngine, PdfPage, TextFragment};

// --- Mock Parsing Engine ---

/// A scriptable [`PdfEngine`].
///
/// Pages are described up front as lists of fragments; failures can be
/// injected at the load stage, at a specific page, or at a specific page's
/// text extraction. Every page request is recorded so tests can assert the
/// controller's strict ascending visit order.
#[derive(Clone, Default)]
pub struct MockPdfEngine {
    pages: Vec<Vec<TextFragment>>,
    load_error: Option<String>,
    page_errors: HashMap<u32, String>,
    text_errors: HashMap<u32, String>,
    accesses: Arc<Mutex<Vec<u32>>>,
}

impl MockPdfEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page whose fragments each carry the given text.
    pub fn with_page(mut self, fragments: &[&str]) -> Self {
        self.pages
            .push(fragments.iter().map(|text| TextFragment::new(*text)).collect());
        self
    }

    /// Appends a page with explicit fragments, including textless ones.
    pub fn with_page_fragments(mut self, fragments: Vec<TextFragment>) -> Self {
        self.pages.push(fragments);
        self
    }

    /// Makes `load` fail with the given message.
    pub fn fail_load(mut self, message: &str) -> Self {
        self.load_error = Some(message.to_string());
        self
    }

    /// Makes loading the given 1-based page fail with the given message.
    pub fn fail_page(mut self, number: u32, message: &str) -> Self {
        self.page_errors.insert(number, message.to_string());
        self
    }

    /// Makes text extraction on the given 1-based page fail.
    pub fn fail_text(mut self, number: u32, message: &str) -> Self {
        self.text_errors.insert(number, message.to_string());
        self
    }

    /// The 1-based page numbers requested so far, in request order.
    pub fn page_accesses(&self) -> Vec<u32> {
        self.accesses.lock().unwrap().clone()
    }
}

#[async_trait]
impl PdfEngine for MockPdfEngine {
    async fn load(&self, _data: &[u8]) -> Result<Box<dyn PdfDocument>, EngineError> {
        if let Some(message) = &self.load_error {
            return Err(EngineError::Parse(message.clone()));
        }
        Ok(Box::new(MockDocument {
            engine: self.clone(),
        }))
    }
}

struct MockDocument {
    engine: MockPdfEngine,
}

#[async_trait]
impl PdfDocument for MockDocument {
    fn page_count(&self) -> u32 {
        self.engine.pages.len() as u32
    }

    async fn page(&self, number: u32) -> Result<Box<dyn PdfPage>, EngineError> {
        self.engine.accesses.lock().unwrap().push(number);

        if let Some(message) = self.engine.page_errors.get(&number) {
            return Err(EngineError::Parse(message.clone()));
        }

        let fragments = number
            .checked_sub(1)
            .and_then(|index| self.engine.pages.get(index as usize))
            .cloned()
            .ok_or(EngineError::PageOutOfBounds(number))?;

        Ok(Box::new(MockPage {
            fragments,
            text_error: self.engine.text_errors.get(&number).cloned(),
        }))
    }
}

struct MockPage {
    fragments: Vec<TextFragment>,
    text_error: Option<String>,
}

#[async_trait]
impl PdfPage for MockPage {
    async fn text_fragments(&self) -> Result<Vec<TextFragment>, EngineError> {
        if let Some(message) = &self.text_error {
            return Err(EngineError::Parse(message.clone()));
        }
        Ok(self.fragments.clone())
    }
}

// --- Test-Specific Helpers ---

#[cfg(feature = "pdf")]
pub mod helpers {
    use anyhow::Result;
    use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

    /// Generates a PDF where every entry of `pages` becomes one page and
    /// every string within becomes a separate text-draw operation, i.e. one
    /// extractable fragment.
    pub fn generate_test_pdf(pages: &[&[&str]]) -> Result<Vec<u8>> {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let font_id = Ref::new(3);
        let font_name = Name(b"F1");

        let mut next_id = 4;
        let mut page_ids = Vec::new();
        let mut content_ids = Vec::new();
        for _ in pages {
            page_ids.push(Ref::new(next_id));
            content_ids.push(Ref::new(next_id + 1));
            next_id += 2;
        }

        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(pages.len() as i32);
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        for (index, fragments) in pages.iter().enumerate() {
            let mut page = pdf.page(page_ids[index]);
            page.media_box(Rect::new(0.0, 0.0, 595.0, 842.0));
            page.parent(page_tree_id);
            page.contents(content_ids[index]);
            page.resources().fonts().pair(font_name, font_id);
            page.finish();

            let mut content = Content::new();
            content.begin_text();
            content.set_font(font_name, 14.0);
            content.next_line(72.0, 734.0);
            for fragment in *fragments {
                content.show(Str(fragment.as_bytes()));
            }
            content.end_text();
            pdf.stream(content_ids[index], &content.finish());
        }

        Ok(pdf.finish())
    }
}
