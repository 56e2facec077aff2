use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the extraction layer.
///
/// Only `BackendUnavailable` is fatal to a run; everything else is scoped to
/// a single entry (or a single page) and ends up as free text in the record.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("PDF backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("Failed to extract text from page {page}: {message}")]
    Page { page: u32, message: String },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
