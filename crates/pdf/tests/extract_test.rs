//! # Local Engine Extraction Tests
//!
//! Generates real PDFs with `pdf-writer` and runs them through the upload
//! controller backed by the `pdf`-crate engine.

use std::sync::Arc;

use anyhow::Result;
use briefcheck::{UploadController, UploadError, UploadedFile, PDF_MEDIA_TYPE};
use briefcheck_pdf::{init, LocalPdfEngine};
use briefcheck_test_utils::helpers::generate_test_pdf;

fn controller() -> UploadController {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .try_init();
    UploadController::new(Arc::new(LocalPdfEngine::new()))
}

fn pdf_upload(data: Vec<u8>) -> Option<UploadedFile> {
    Some(UploadedFile::new(data, PDF_MEDIA_TYPE))
}

#[tokio::test]
async fn test_init_is_idempotent() -> Result<()> {
    init()?;
    init()?;
    Ok(())
}

#[tokio::test]
async fn test_extracts_single_page() -> Result<()> {
    let data = generate_test_pdf(&[&["Hello"]])?;

    let document = controller()
        .handle_selection(pdf_upload(data))
        .await
        .expect("a selected file must produce an outcome")
        .expect("a well-formed PDF must extract");

    assert_eq!(document.as_str(), "Page Number: 1\nHello");
    Ok(())
}

#[tokio::test]
async fn test_extracts_two_pages_with_multiple_fragments() -> Result<()> {
    let data = generate_test_pdf(&[&["A", "B"], &["C"]])?;

    let document = controller()
        .handle_selection(pdf_upload(data))
        .await
        .unwrap()
        .expect("a well-formed two-page PDF must extract");

    assert_eq!(document.as_str(), "Page Number: 1\nA B Page Number: 2\nC");
    Ok(())
}

#[tokio::test]
async fn test_same_file_twice_yields_same_document() -> Result<()> {
    let data = generate_test_pdf(&[&["Stable"], &["Output"]])?;
    let controller = controller();

    let first = controller
        .handle_selection(pdf_upload(data.clone()))
        .await
        .unwrap()
        .expect("first upload must extract");
    let second = controller
        .handle_selection(pdf_upload(data))
        .await
        .unwrap()
        .expect("second upload must extract");

    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_corrupted_pdf_reports_parser_message() {
    let data = b"%PDF-1.7 this is not a well-formed document".to_vec();

    let error = controller()
        .handle_selection(pdf_upload(data))
        .await
        .unwrap()
        .expect_err("corrupted bytes must fail extraction");

    assert!(matches!(error, UploadError::Extraction(_)));
    assert!(!error.to_string().is_empty());
}

#[tokio::test]
async fn test_non_pdf_media_type_never_reaches_the_parser() {
    let error = controller()
        .handle_selection(Some(UploadedFile::new(
            b"plain text".to_vec(),
            "text/plain",
        )))
        .await
        .unwrap()
        .expect_err("non-PDF uploads must be rejected");

    assert_eq!(error.to_string(), "Please upload a valid PDF file.");
}
