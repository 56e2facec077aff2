use crate::config::{ExtractionConfig, ExtractionOptions};
use crate::error::{ExtractError, Result};
use crate::output::RunSummary;
use crate::pdf::{PdfBackend, PdfBackendImpl};
use crate::text::normalize_and_truncate;
use crate::types::*;
use chrono::{DateTime, Utc};
use std::time::Instant;

/// Text pulled out of one document before it becomes a record
struct DocumentText {
    text: String,
    skipped_pages: Vec<u32>,
}

/// Turns (path, label) entries into extraction records, one at a time.
pub struct Extractor {
    backend: Box<dyn PdfBackend>,
    options: ExtractionOptions,
}

impl Extractor {
    /// Create Extractor with an explicit backend
    pub fn new_with_backend(backend: Box<dyn PdfBackend>, options: ExtractionOptions) -> Self {
        Self { backend, options }
    }

    /// Convenience constructor using whichever backend is compiled in
    ///
    /// Fails with `ExtractError::BackendUnavailable` when the build has no
    /// PDF backend at all.
    pub fn with_default_backend(options: ExtractionOptions) -> Result<Self> {
        let backend = PdfBackendImpl::detect()?;
        tracing::debug!("🚀 Using {} backend", backend.name());
        Ok(Self::new_with_backend(Box::new(backend), options))
    }

    /// Get the backend name for logging
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    /// Process every entry, unless the backend is not usable at all.
    ///
    /// An unhealthy backend short-circuits the whole run before any entry is
    /// touched; per-entry failures never do.
    pub fn run(&self, entries: &[SourceEntry]) -> RunOutcome {
        if !self.backend.is_healthy() {
            let error = ExtractError::BackendUnavailable(format!(
                "{} is not ready",
                self.backend.name()
            ));
            tracing::error!("❌ {error}");
            return RunOutcome::Unavailable {
                error: error.to_string(),
            };
        }
        RunOutcome::Completed(self.extract_all(entries))
    }

    /// One record per entry, in input order.
    pub fn extract_all(&self, entries: &[SourceEntry]) -> Vec<ExtractionRecord> {
        let start_time = Instant::now();
        tracing::info!(
            "📄 Extracting {} documents with {}",
            entries.len(),
            self.backend.name()
        );

        let records: Vec<ExtractionRecord> =
            entries.iter().map(|entry| self.extract_entry(entry)).collect();

        let failed = records.iter().filter(|r| r.is_failure()).count();
        tracing::info!(
            "⏱️  Extracted {} documents ({} failed) in {:.3}s",
            records.len(),
            failed,
            start_time.elapsed().as_secs_f64()
        );
        records
    }

    /// Process a single entry. Never fails: errors become a failed record.
    pub fn extract_entry(&self, entry: &SourceEntry) -> ExtractionRecord {
        let start_time = Instant::now();
        let display_name = entry.display_name();
        let source = self.options.include_source.then(|| display_name.clone());

        let record = match self.extract_document(entry) {
            Ok(document) => {
                let record = ExtractionRecord::extracted(
                    source,
                    entry.label.clone(),
                    document.text,
                    document.skipped_pages,
                );
                tracing::info!("OK: {} ({} chars)", display_name, record.char_count());
                record
            }
            Err(e) => {
                tracing::warn!("ERR: {}: {}", display_name, e);
                ExtractionRecord::failed(source, entry.label.clone(), e.to_string())
            }
        };

        tracing::debug!(
            "⏱️  {}: {}ms",
            display_name,
            start_time.elapsed().as_millis()
        );
        record
    }

    /// Read, parse, extract page by page, then normalize and truncate.
    fn extract_document(&self, entry: &SourceEntry) -> Result<DocumentText> {
        let path = self.options.resolve(&entry.path);
        let pdf_bytes = std::fs::read(&path).map_err(|source| ExtractError::Read {
            path: path.clone(),
            source,
        })?;

        let document = self.backend.open(&pdf_bytes)?;

        let mut page_texts = Vec::new();
        let mut skipped_pages = Vec::new();
        for page_number in document.page_numbers() {
            match document.page_text(page_number) {
                Ok(text) => page_texts.push(text),
                Err(e) => {
                    tracing::warn!("⚠️  {}: skipping page: {}", entry.display_name(), e);
                    skipped_pages.push(page_number);
                }
            }
        }

        let text = normalize_and_truncate(&page_texts.join(" "), self.options.max_chars);
        Ok(DocumentText {
            text,
            skipped_pages,
        })
    }
}

/// Run a whole manifest with the compiled-in backend.
///
/// A missing backend is reported as `RunOutcome::Unavailable` instead of an
/// array of per-entry errors.
pub fn run(config: &ExtractionConfig) -> RunOutcome {
    run_with_summary(config).0
}

/// Same as [`run`], also returning the run report.
pub fn run_with_summary(config: &ExtractionConfig) -> (RunOutcome, RunSummary) {
    let started_at = Utc::now();
    run_detected(
        Extractor::with_default_backend(config.options()),
        &config.documents,
        started_at,
    )
}

/// Finish a run once backend detection has been attempted.
fn run_detected(
    detected: Result<Extractor>,
    entries: &[SourceEntry],
    started_at: DateTime<Utc>,
) -> (RunOutcome, RunSummary) {
    match detected {
        Ok(extractor) => {
            let outcome = extractor.run(entries);
            let summary =
                RunSummary::from_outcome(&outcome, Some(extractor.backend_name()), started_at);
            (outcome, summary)
        }
        Err(error) => {
            tracing::error!("❌ {error}");
            let outcome = RunOutcome::Unavailable {
                error: error.to_string(),
            };
            let summary = RunSummary::from_outcome(&outcome, None, started_at);
            (outcome, summary)
        }
    }
}
