//! Configuration types
//!
//! [`ConvertConfig`] is everything the conversion pipeline consumes.
//! [`JobFile`] is the on-disk description of a run (YAML or JSON), which the
//! CLI combines with command-line flags into a `ConvertConfig`.

use crate::error::{Error, Result};
use crate::normalize::NullDefaults;
use crate::output::WriterOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Pipeline Config
// ============================================================================

/// Input for one conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Source files, in the order their rows appear in the output
    pub input_paths: Vec<PathBuf>,

    /// Output file; `.orc` selects ORC, anything else Parquet
    pub output_path: PathBuf,

    /// Format-specific writer settings
    #[serde(flatten)]
    pub writer: WriterOptions,

    /// Values written in place of nulls
    #[serde(default)]
    pub null_defaults: NullDefaults,
}

impl ConvertConfig {
    /// Create a config with default writer settings
    pub fn new(input_paths: Vec<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_paths,
            output_path: output_path.into(),
            writer: WriterOptions::default(),
            null_defaults: NullDefaults::default(),
        }
    }

    /// Replace the writer settings
    #[must_use]
    pub fn with_writer(mut self, writer: WriterOptions) -> Self {
        self.writer = writer;
        self
    }

    /// Replace the null defaults
    #[must_use]
    pub fn with_null_defaults(mut self, null_defaults: NullDefaults) -> Self {
        self.null_defaults = null_defaults;
        self
    }

    /// Check the output destination is usable
    pub fn validate(&self) -> Result<()> {
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::config("Output path is empty"));
        }
        if self.output_path.is_dir() {
            return Err(Error::config(format!(
                "Output path '{}' is a directory",
                self.output_path.display()
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Job File
// ============================================================================

/// A conversion job loaded from YAML or JSON
///
/// ```yaml
/// input: data/events
/// output: out/events.orc
/// orc:
///   compression: zstd
/// parquet:
///   compression: snappy
///   flavor: spark
/// null_defaults:
///   string: "n/a"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFile {
    /// Directory scanned for `*.json` files
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Output file
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(flatten)]
    pub writer: WriterOptions,

    #[serde(default)]
    pub null_defaults: NullDefaults,
}

impl JobFile {
    /// Load a job file; `.json` files are parsed as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Parse a job from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a job from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
