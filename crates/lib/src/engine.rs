//! # The Parsing-Engine Seam
//!
//! The PDF parsing capability is an external collaborator. This module
//! defines the contract an engine must fulfil so the upload controller can
//! treat all backends uniformly, and so tests can substitute a scriptable
//! mock for the real parser.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a parsing engine.
///
/// `Parse` carries the backend's own message; the controller surfaces it to
/// the user verbatim.
#[derive(Error, Debug)]
pub enum EngineError {
    /// One-time engine initialization failed.
    #[error("PDF engine initialization failed: {0}")]
    Init(String),

    /// The backend could not load or parse the document content.
    #[error("{0}")]
    Parse(String),

    /// A page number outside `1..=page_count` was requested.
    #[error("page {0} is out of bounds")]
    PageOutOfBounds(u32),
}

/// A unit of extractable text positioned on a page.
///
/// Not every fragment carries text; those without contribute an empty string
/// to the page's content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFragment {
    pub text: Option<String>,
}

impl TextFragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// A fragment without extractable text.
    pub fn empty() -> Self {
        Self { text: None }
    }
}

/// A PDF parsing backend.
#[async_trait]
pub trait PdfEngine: Send + Sync {
    /// Parses raw file bytes into a document. Fails on malformed input.
    async fn load(&self, data: &[u8]) -> Result<Box<dyn PdfDocument>, EngineError>;
}

/// A successfully loaded document.
#[async_trait]
pub trait PdfDocument: Send + Sync {
    /// The number of pages in the document.
    fn page_count(&self) -> u32;

    /// Loads a single page. Page numbers are 1-based.
    async fn page(&self, number: u32) -> Result<Box<dyn PdfPage>, EngineError>;
}

/// A single loaded page.
#[async_trait]
pub trait PdfPage: Send + Sync {
    /// Returns the page's text fragments in document order.
    async fn text_fragments(&self) -> Result<Vec<TextFragment>, EngineError>;
}
