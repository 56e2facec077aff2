// Textharvest Core Library
//
// Extracts labelled PDF text through a pluggable backend.
// Main interface for turning a manifest of documents into JSON records.

pub mod types;
pub mod error;
pub mod text;
pub mod pdf;
pub mod extractor;
pub mod output;
pub mod config;

// Re-export main types and functions for easy use
pub use types::*;
pub use error::ExtractError;
pub use pdf::{PdfBackend, PdfBackendImpl, PdfPages};
pub use extractor::{run, run_with_summary, Extractor};
pub use output::RunSummary;
pub use config::{ExtractionConfig, ExtractionOptions};
pub use text::DEFAULT_MAX_CHARS;

// Re-export backends for direct use
#[cfg(feature = "lopdf-backend")]
pub use pdf::LopdfBackend;
