//! Building the run manifest from the config file and command-line entries

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use textharvest_core::{ExtractionConfig, SourceEntry};

/// Parse a `PATH=LABEL` argument. The label is everything after the last
/// `=`, so paths may contain `=` but labels may not.
pub fn parse_entry(raw: &str) -> Result<SourceEntry> {
    let (path, label) = raw
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("Expected PATH=LABEL, got '{}'", raw))?;
    let path = path.trim();
    let label = label.trim();
    if path.is_empty() {
        return Err(anyhow!("Missing path in '{}'", raw));
    }
    if label.is_empty() {
        return Err(anyhow!("Missing label in '{}'", raw));
    }
    Ok(SourceEntry::new(path, label))
}

/// Command-line overrides applied on top of a manifest
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_dir: Option<PathBuf>,
    pub max_chars: Option<usize>,
    pub omit_source: bool,
    pub entries: Vec<SourceEntry>,
}

/// Load the manifest (if any), then apply overrides. Entries given on the
/// command line run after the manifest's own documents.
pub fn build_config(config_path: Option<&Path>, overrides: Overrides) -> Result<ExtractionConfig> {
    let mut config = match config_path {
        Some(path) => {
            let config = ExtractionConfig::load_from_file(path)?;
            tracing::info!("📋 Loaded config from: {}", path.display());
            config
        }
        None => {
            tracing::debug!("📋 Using default config");
            ExtractionConfig::default()
        }
    };

    if let Some(base_dir) = overrides.base_dir {
        config.base_dir = Some(base_dir);
    }
    if let Some(max_chars) = overrides.max_chars {
        config.max_chars = max_chars;
    }
    if overrides.omit_source {
        config.include_source = false;
    }
    config.documents.extend(overrides.entries);

    config.validate()?;
    Ok(config)
}
