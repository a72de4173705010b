//! Shared data structures for the upload-and-extract workflow.

use serde::Serialize;

use crate::errors::UploadError;

/// The only media type the upload controller accepts.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A file handed over by the host's file-selection event.
///
/// The content lives for a single upload attempt and is dropped once
/// extraction completes or fails.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Raw file bytes.
    pub data: Vec<u8>,
    /// The media type declared by the host, e.g. `application/pdf`.
    pub media_type: String,
}

impl UploadedFile {
    pub fn new(data: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            data,
            media_type: media_type.into(),
        }
    }
}

/// The extracted text of a single page. Page numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub number: u32,
    pub text: String,
}

/// The single page-annotated string produced from an uploaded PDF.
///
/// This is the sole artifact surfaced on success; it is shipped downstream
/// next to a prompt template, hence the `Serialize` derive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedDocument {
    pub text: String,
}

impl ExtractedDocument {
    /// Formats each page as `Page Number: {n}\n{text}` and joins the pages
    /// with a single space.
    pub fn from_pages(pages: &[PageContent]) -> Self {
        let text = pages
            .iter()
            .map(|page| format!("Page Number: {}\n{}", page.number, page.text))
            .collect::<Vec<_>>()
            .join(" ");
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// The caller-owned view of the last upload report.
///
/// This preserves the shape of the original two-value interface (current
/// document, current error) while keeping the two sides mutually exclusive:
/// applying an outcome always sets one and clears the other, so a state with
/// both populated is never observable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub document: Option<String>,
    pub error: Option<String>,
}

impl UploadState {
    /// Folds one upload outcome into the state.
    pub fn apply(&mut self, outcome: &Result<ExtractedDocument, UploadError>) {
        match outcome {
            Ok(document) => {
                self.document = Some(document.text.clone());
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.document = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_are_annotated_and_space_joined() {
        let pages = vec![
            PageContent {
                number: 1,
                text: "A B".to_string(),
            },
            PageContent {
                number: 2,
                text: "C".to_string(),
            },
        ];
        let document = ExtractedDocument::from_pages(&pages);
        assert_eq!(document.as_str(), "Page Number: 1\nA B Page Number: 2\nC");
    }

    #[test]
    fn test_empty_page_list_yields_empty_text() {
        let document = ExtractedDocument::from_pages(&[]);
        assert_eq!(document.as_str(), "");
    }

    #[test]
    fn test_state_clears_the_opposite_side() {
        let mut state = UploadState::default();

        state.apply(&Ok(ExtractedDocument {
            text: "Page Number: 1\nHello".to_string(),
        }));
        assert_eq!(state.document.as_deref(), Some("Page Number: 1\nHello"));
        assert_eq!(state.error, None);

        state.apply(&Err(UploadError::InvalidFileType));
        assert_eq!(state.document, None);
        assert_eq!(state.error.as_deref(), Some("Please upload a valid PDF file."));
    }
}
