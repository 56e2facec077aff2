//! PDF Backend traits
//!
//! Defines the interface every PDF-parsing backend must implement. The
//! extractor only ever needs two things from a document: the list of pages,
//! and the plain text of one page at a time.

use crate::error::Result;

/// A parsed document that can hand out text page by page.
///
/// Page numbers are 1-indexed and returned in ascending order. A failure on
/// one page must not poison the others.
pub trait PdfPages {
    /// All page numbers in the document
    fn page_numbers(&self) -> Vec<u32>;

    /// Plain text of a single page
    fn page_text(&self, page_number: u32) -> Result<String>;
}

/// Backend trait for PDF parsing
pub trait PdfBackend: Send + Sync {
    /// Parse PDF bytes into a page-addressable document
    fn open(&self, pdf_bytes: &[u8]) -> Result<Box<dyn PdfPages>>;

    /// Backend identifier for logging/debugging
    fn name(&self) -> &str;

    /// Check if backend is ready to parse documents
    fn is_healthy(&self) -> bool;
}

#[cfg(feature = "lopdf-backend")]
pub mod lopdf_backend;

#[cfg(feature = "lopdf-backend")]
pub use self::lopdf_backend::LopdfBackend;
