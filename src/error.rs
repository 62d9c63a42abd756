//! Error types for the PDF merger library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PDF merger library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid PDF (no pages)
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// Merge was asked to run without inputs
    #[error("No input files provided")]
    NoInputFiles,

    /// Discovery found nothing to merge
    #[error("No matching files found in {}", .0.display())]
    NoFilesFound(PathBuf),

    /// Standard input or the key source ended before the session finished
    #[error("Input closed before the session was complete")]
    InputClosed,

    /// General error
    #[error("{0}")]
    General(String),
}
