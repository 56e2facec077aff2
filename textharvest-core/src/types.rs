use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ===== INPUT TYPES =====

/// One manifest entry: where the PDF lives and the category it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceEntry {
    /// Absolute path, or a path relative to the manifest's `base_dir`
    pub path: PathBuf,
    /// Human-assigned category, never derived from content
    #[serde(alias = "category")]
    pub label: String,
}

impl SourceEntry {
    pub fn new(path: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }

    /// The location as written in the manifest, used for the `file` key
    /// and for progress lines.
    pub fn display_name(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

// ===== PER-ITEM OUTPUT =====

/// Result of processing one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The document opened. Pages that could not be read are listed in
    /// `skipped_pages` (1-indexed) rather than failing the item.
    Extracted {
        text: String,
        char_count: usize,
        skipped_pages: Vec<u32>,
    },
    /// The document could not be read or parsed at all.
    Failed { error: String },
}

/// One output record, in input order.
///
/// Wire shape: `{file?, category, text, chars, error?, skipped_pages?}`.
/// A failed item still carries `text: ""` and `chars: 0` so consumers can
/// treat every element uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecord {
    pub source: Option<String>,
    pub label: String,
    pub outcome: ItemOutcome,
}

impl ExtractionRecord {
    pub fn extracted(
        source: Option<String>,
        label: String,
        text: String,
        skipped_pages: Vec<u32>,
    ) -> Self {
        let char_count = text.chars().count();
        Self {
            source,
            label,
            outcome: ItemOutcome::Extracted {
                text,
                char_count,
                skipped_pages,
            },
        }
    }

    pub fn failed(source: Option<String>, label: String, error: String) -> Self {
        Self {
            source,
            label,
            outcome: ItemOutcome::Failed { error },
        }
    }

    pub fn text(&self) -> &str {
        match &self.outcome {
            ItemOutcome::Extracted { text, .. } => text,
            ItemOutcome::Failed { .. } => "",
        }
    }

    pub fn char_count(&self) -> usize {
        match &self.outcome {
            ItemOutcome::Extracted { char_count, .. } => *char_count,
            ItemOutcome::Failed { .. } => 0,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ItemOutcome::Extracted { .. } => None,
            ItemOutcome::Failed { error } => Some(error),
        }
    }

    pub fn skipped_pages(&self) -> &[u32] {
        match &self.outcome {
            ItemOutcome::Extracted { skipped_pages, .. } => skipped_pages,
            ItemOutcome::Failed { .. } => &[],
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, ItemOutcome::Failed { .. })
    }
}

impl Serialize for ExtractionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(source) = &self.source {
            map.serialize_entry("file", source)?;
        }
        map.serialize_entry("category", &self.label)?;
        map.serialize_entry("text", self.text())?;
        map.serialize_entry("chars", &self.char_count())?;
        match &self.outcome {
            ItemOutcome::Extracted { skipped_pages, .. } if !skipped_pages.is_empty() => {
                map.serialize_entry("skipped_pages", skipped_pages)?;
            }
            ItemOutcome::Extracted { .. } => {}
            ItemOutcome::Failed { error } => {
                map.serialize_entry("error", error)?;
            }
        }
        map.end()
    }
}

// ===== RUN OUTPUT =====

/// Top-level outcome of a run.
///
/// `Completed` serializes as a JSON array of records; `Unavailable` as a
/// single `{"error": ...}` object, emitted when no PDF backend could be used
/// and nothing was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RunOutcome {
    Completed(Vec<ExtractionRecord>),
    Unavailable { error: String },
}

impl RunOutcome {
    pub fn records(&self) -> &[ExtractionRecord] {
        match self {
            RunOutcome::Completed(records) => records,
            RunOutcome::Unavailable { .. } => &[],
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, RunOutcome::Unavailable { .. })
    }
}
