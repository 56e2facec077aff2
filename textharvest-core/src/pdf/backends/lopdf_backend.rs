//! lopdf backend for PDF text extraction
//!
//! Pure-Rust parsing via the `lopdf` crate. The whole document is loaded
//! into memory once; text is then pulled out one page at a time so a page
//! with a broken content stream or an unsupported font encoding only costs
//! that page.

use super::{PdfBackend, PdfPages};
use crate::error::{ExtractError, Result};
use lopdf::Document;

/// lopdf-based backend. Stateless; safe to share across the whole run.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn open(&self, pdf_bytes: &[u8]) -> Result<Box<dyn PdfPages>> {
        tracing::debug!("🔧 Parsing {} bytes with lopdf", pdf_bytes.len());

        let document =
            Document::load_mem(pdf_bytes).map_err(|e| ExtractError::Parse(e.to_string()))?;

        tracing::debug!("   {} pages found", document.get_pages().len());
        Ok(Box::new(LopdfPages { document }))
    }

    fn name(&self) -> &str {
        "LopdfBackend"
    }

    fn is_healthy(&self) -> bool {
        // Nothing external to probe: the parser is linked in
        true
    }
}

/// A loaded lopdf document
struct LopdfPages {
    document: Document,
}

impl PdfPages for LopdfPages {
    fn page_numbers(&self) -> Vec<u32> {
        // BTreeMap keys, already ascending
        self.document.get_pages().keys().copied().collect()
    }

    fn page_text(&self, page_number: u32) -> Result<String> {
        self.document
            .extract_text(&[page_number])
            .map_err(|e| ExtractError::Page {
                page: page_number,
                message: e.to_string(),
            })
    }
}
