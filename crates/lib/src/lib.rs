//! # briefcheck
//!
//! The extraction front end of a document-review assistant. An uploaded
//! project-brief PDF is validated, parsed page by page through a pluggable
//! parsing engine, and flattened into a single page-annotated string that is
//! later sent downstream together with one of the policy-check prompt
//! templates from the [`catalog`].
//!
//! The parsing engine itself is an external collaborator behind the traits
//! in [`engine`]; see the `briefcheck-pdf` crate for the default
//! implementation.

pub mod catalog;
pub mod engine;
pub mod errors;
pub mod prompts;
pub mod types;
pub mod upload;

pub use catalog::{PromptCheck, CHECKS};
pub use engine::{EngineError, PdfDocument, PdfEngine, PdfPage, TextFragment};
pub use errors::UploadError;
pub use types::{ExtractedDocument, PageContent, UploadState, UploadedFile, PDF_MEDIA_TYPE};
pub use upload::{UploadController, UploadOutcome};
