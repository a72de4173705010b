use thiserror::Error;

/// Errors reported to the caller for a single upload attempt.
///
/// Both variants surface through the same channel as a user-facing message:
/// a fixed one for rejected media types, and the parsing engine's own
/// message, verbatim, for everything that goes wrong during extraction.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The selected file did not declare the PDF media type.
    #[error("Please upload a valid PDF file.")]
    InvalidFileType,

    /// The engine failed while loading the document, a page, or its text.
    #[error("{0}")]
    Extraction(String),
}
