use crate::text::DEFAULT_MAX_CHARS;
use crate::types::SourceEntry;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

/// Manifest describing one extraction run.
///
/// ```yaml
/// base_dir: /data/handouts
/// max_chars: 6000
/// include_source: true
/// documents:
///   - path: intro.pdf
///     label: Introduction
///   - path: /abs/path/ethics.pdf
///     label: Ethics
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractionConfig {
    /// Relative document paths are resolved against this directory.
    /// When loaded from a file, a relative `base_dir` is taken relative to
    /// the manifest's own directory, not the working directory.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// Maximum number of characters kept per document
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    /// Emit the `file` key on every record
    #[serde(default = "default_true")]
    pub include_source: bool,
    /// Documents to process, in output order
    #[serde(default)]
    pub documents: Vec<SourceEntry>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            max_chars: DEFAULT_MAX_CHARS,
            include_source: true,
            documents: Vec::new(),
        }
    }
}

impl ExtractionConfig {
    /// Load a manifest from disk. `.json` files are parsed as JSON,
    /// everything else as YAML.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let mut config: ExtractionConfig = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON config {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML config {}", path.display()))?
        };

        config.base_dir = config.base_dir.take().map(|base_dir| match path.parent() {
            Some(manifest_dir) if base_dir.is_relative() => manifest_dir.join(base_dir),
            _ => base_dir,
        });
        Ok(config)
    }

    /// Reject settings that would make every record meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.max_chars == 0 {
            bail!("max_chars must be greater than zero");
        }
        for (index, entry) in self.documents.iter().enumerate() {
            if entry.label.trim().is_empty() {
                bail!(
                    "Document #{} ({}) has an empty label",
                    index + 1,
                    entry.display_name()
                );
            }
        }
        Ok(())
    }

    pub fn options(&self) -> ExtractionOptions {
        ExtractionOptions {
            base_dir: self.base_dir.clone(),
            max_chars: self.max_chars,
            include_source: self.include_source,
        }
    }
}

/// The per-run knobs the extractor needs, split from the document list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOptions {
    pub base_dir: Option<PathBuf>,
    pub max_chars: usize,
    pub include_source: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        ExtractionConfig::default().options()
    }
}

impl ExtractionOptions {
    /// Resolve an entry path against `base_dir`. Absolute paths win.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(path),
            None => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_yaml_manifest_with_defaults() {
        let yaml = "documents:\n  - path: a.pdf\n    label: A\n  - path: b.pdf\n    category: B\n";
        let config: ExtractionConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.max_chars, DEFAULT_MAX_CHARS);
        assert!(config.include_source);
        assert!(config.base_dir.is_none());
        assert_eq!(config.documents.len(), 2);
        assert_eq!(config.documents[1].label, "B");
    }

    #[test]
    fn test_load_json_manifest_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"base_dir": "/data", "max_chars": 10, "include_source": false,
               "documents": [{{"path": "x.pdf", "label": "X"}}]}}"#
        )
        .unwrap();

        let config = ExtractionConfig::load_from_file(&path).unwrap();
        assert_eq!(config.base_dir, Some(PathBuf::from("/data")));
        assert_eq!(config.max_chars, 10);
        assert!(!config.include_source);
    }

    #[test]
    fn test_relative_base_dir_follows_manifest_location() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("manifest.yaml");
        std::fs::write(&manifest, "base_dir: pdfs\ndocuments: []\n").unwrap();

        let config = ExtractionConfig::load_from_file(&manifest).unwrap();
        assert_eq!(config.base_dir, Some(dir.path().join("pdfs")));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = ExtractionConfig::load_from_file(Path::new("/nonexistent/manifest.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limit_and_blank_label() {
        let mut config = ExtractionConfig {
            max_chars: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.max_chars = 100;
        config.documents.push(SourceEntry::new("a.pdf", "  "));
        assert!(config.validate().is_err());

        config.documents[0].label = "A".to_string();
        assert!(config.validate().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_joins_relative_and_keeps_absolute() {
        let options = ExtractionOptions {
            base_dir: Some(PathBuf::from("/data/handouts")),
            ..Default::default()
        };
        assert_eq!(
            options.resolve(Path::new("intro.pdf")),
            PathBuf::from("/data/handouts/intro.pdf")
        );
        assert_eq!(
            options.resolve(Path::new("/elsewhere/law.pdf")),
            PathBuf::from("/elsewhere/law.pdf")
        );
    }
}
