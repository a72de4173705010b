//! # The Upload-and-Extract Controller
//!
//! Receives a file-selection event, validates the declared media type,
//! walks the document page by page through the parsing engine, and reports
//! either the page-annotated text or a user-facing error.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::engine::{EngineError, PdfEngine};
use crate::errors::UploadError;
use crate::types::{ExtractedDocument, PageContent, UploadedFile, PDF_MEDIA_TYPE};

/// The single tagged outcome of one upload attempt: either the extracted
/// document or an error, never both.
pub type UploadOutcome = Result<ExtractedDocument, UploadError>;

/// The upload-and-extract controller.
///
/// The controller holds no mutable state; every call to
/// [`handle_selection`](Self::handle_selection) returns its own outcome, so
/// overlapping uploads cannot interleave observable state. Serializing
/// reports is the caller's job (see
/// [`UploadState`](crate::types::UploadState)).
pub struct UploadController {
    engine: Arc<dyn PdfEngine>,
}

impl UploadController {
    pub fn new(engine: Arc<dyn PdfEngine>) -> Self {
        Self { engine }
    }

    /// Handles one file-selection event.
    ///
    /// Returns `None` when the selection carried no file. Otherwise the file
    /// is validated and extracted; a failed extraction is terminal for the
    /// attempt and the user must re-select a file to retry.
    pub async fn handle_selection(&self, selection: Option<UploadedFile>) -> Option<UploadOutcome> {
        let file = selection?;
        Some(self.process(file).await)
    }

    async fn process(&self, file: UploadedFile) -> UploadOutcome {
        if file.media_type != PDF_MEDIA_TYPE {
            warn!("Rejected upload with media type '{}'.", file.media_type);
            return Err(UploadError::InvalidFileType);
        }

        self.extract(&file.data)
            .await
            .map_err(|e| UploadError::Extraction(e.to_string()))
    }

    /// Walks the document strictly in ascending page order, short-circuiting
    /// on the first engine failure.
    async fn extract(&self, data: &[u8]) -> Result<ExtractedDocument, EngineError> {
        let document = self.engine.load(data).await?;
        let page_count = document.page_count();
        debug!("Loaded uploaded PDF with {page_count} pages.");

        let mut pages = Vec::with_capacity(page_count as usize);
        for number in 1..=page_count {
            let page = document.page(number).await?;
            let fragments = page.text_fragments().await?;
            let text = fragments
                .iter()
                .map(|fragment| fragment.text.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" ");
            pages.push(PageContent { number, text });
        }

        let extracted = ExtractedDocument::from_pages(&pages);
        if extracted.text.trim().is_empty() {
            warn!("Extraction produced no text content.");
        }
        info!("Extracted {page_count} pages from uploaded PDF.");
        Ok(extracted)
    }
}
