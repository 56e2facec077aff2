use crate::types::*;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

impl RunOutcome {
    /// Serialize for the data stream. Non-ASCII text is written as-is.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write the JSON document plus a trailing newline.
    pub fn write_to<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<()> {
        let json = self.to_json(pretty)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    pub fn save(&self, path: &Path, pretty: bool) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create output {}", path.display()))?;
        self.write_to(&mut file, pretty)
    }
}

/// Run report kept apart from the data stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub backend: Option<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub documents: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Pages skipped across all documents
    pub skipped_pages: usize,
    pub total_chars: usize,
    pub unavailable: bool,
}

impl RunSummary {
    pub fn from_outcome(
        outcome: &RunOutcome,
        backend: Option<&str>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let finished_at = Utc::now();
        let records = outcome.records();
        let failed = records.iter().filter(|r| r.is_failure()).count();

        Self {
            run_id: Uuid::new_v4(),
            backend: backend.map(str::to_string),
            started_at,
            finished_at,
            elapsed_ms: (finished_at - started_at).num_milliseconds().max(0) as u64,
            documents: records.len(),
            succeeded: records.len() - failed,
            failed,
            skipped_pages: records.iter().map(|r| r.skipped_pages().len()).sum(),
            total_chars: records.iter().map(|r| r.char_count()).sum(),
            unavailable: outcome.is_unavailable(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write summary {}", path.display()))?;
        Ok(())
    }
}
