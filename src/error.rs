//! Error types for json2tables
//!
//! This module defines the error hierarchy for the whole conversion pipeline.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The core never exits the process: the CLI decides how an error is reported.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for json2tables
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pipeline Errors
    // ============================================================================
    #[error("No input files to convert")]
    NoInputFiles,

    #[error("Failed to parse '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error(
        "Schema conflict on column '{column}' in '{}': cannot combine {left} with {right}",
        path.display()
    )]
    SchemaConflict {
        column: String,
        left: String,
        right: String,
        path: PathBuf,
    },

    #[error("Failed to write '{}': {message}", path.display())]
    Write { path: PathBuf, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Discovery Errors
    // ============================================================================
    #[error("Input directory '{}' is not readable: {message}", path.display())]
    Discovery { path: PathBuf, message: String },

    // ============================================================================
    // Arrow/Parquet/ORC Errors
    // ============================================================================
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("ORC error: {message}")]
    Orc { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoInputFiles,
    Parse,
    SchemaConflict,
    Write,
    Config,
    Discovery,
    Internal,
}

impl Error {
    /// Create a parse error for a source file
    pub fn parse(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a schema conflict error
    pub fn schema_conflict(
        column: impl Into<String>,
        left: impl ToString,
        right: impl ToString,
        path: impl AsRef<Path>,
    ) -> Self {
        Self::SchemaConflict {
            column: column.into(),
            left: left.to_string(),
            right: right.to_string(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a write error for an output destination
    pub fn write(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a discovery error
    pub fn discovery(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Discovery {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create an ORC error
    pub fn orc(message: impl ToString) -> Self {
        Self::Orc {
            message: message.to_string(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoInputFiles => ErrorKind::NoInputFiles,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::SchemaConflict { .. } => ErrorKind::SchemaConflict,
            Error::Write { .. } => ErrorKind::Write,
            Error::Config { .. } | Error::YamlParse(_) | Error::JsonParse(_) => ErrorKind::Config,
            Error::Discovery { .. } => ErrorKind::Discovery,
            _ => ErrorKind::Internal,
        }
    }

    /// Whether the error was caused by how the tool was invoked rather than by the data
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NoInputFiles | ErrorKind::Config | ErrorKind::Discovery
        )
    }
}

/// Result type alias for json2tables
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
