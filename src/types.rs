//! Common types used throughout json2tables
//!
//! This module contains shared type definitions, type aliases,
//! and small enums used by the configuration, CLI and output layers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Output Format
// ============================================================================

/// Columnar file format of the output table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Orc,
    Parquet,
}

impl OutputFormat {
    /// Pick the format for an output path
    ///
    /// `.orc` (any case) selects ORC; every other extension, or none, selects Parquet.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let is_orc = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.trim().eq_ignore_ascii_case("orc"));

        if is_orc {
            OutputFormat::Orc
        } else {
            OutputFormat::Parquet
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Orc => write!(f, "ORC"),
            OutputFormat::Parquet => write!(f, "Parquet"),
        }
    }
}

// ============================================================================
// Compression
// ============================================================================

/// Compression codec for the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CompressionCodec {
    /// No compression
    None,
    Snappy,
    Gzip,
    Zstd,
    Lz4,
}

impl fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompressionCodec::None => "none",
            CompressionCodec::Snappy => "snappy",
            CompressionCodec::Gzip => "gzip",
            CompressionCodec::Zstd => "zstd",
            CompressionCodec::Lz4 => "lz4",
        };
        f.write_str(name)
    }
}

impl From<CompressionCodec> for parquet::basic::Compression {
    fn from(codec: CompressionCodec) -> Self {
        use parquet::basic::{Compression, GzipLevel, ZstdLevel};

        match codec {
            CompressionCodec::None => Compression::UNCOMPRESSED,
            CompressionCodec::Snappy => Compression::SNAPPY,
            CompressionCodec::Gzip => Compression::GZIP(GzipLevel::default()),
            CompressionCodec::Zstd => Compression::ZSTD(ZstdLevel::default()),
            CompressionCodec::Lz4 => Compression::LZ4_RAW,
        }
    }
}

// ============================================================================
// Parquet Compatibility
// ============================================================================

/// Compatibility flavor for Parquet output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParquetFlavor {
    /// Column names sanitized for Spark readers
    #[default]
    Spark,
    /// Column names written verbatim
    None,
}

/// Parquet format version written to the file footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum ParquetVersion {
    #[default]
    #[serde(rename = "1.0")]
    #[value(name = "1.0")]
    V1,
    #[serde(rename = "2.0")]
    #[value(name = "2.0")]
    V2,
}

impl From<ParquetVersion> for parquet::file::properties::WriterVersion {
    fn from(version: ParquetVersion) -> Self {
        match version {
            ParquetVersion::V1 => parquet::file::properties::WriterVersion::PARQUET_1_0,
            ParquetVersion::V2 => parquet::file::properties::WriterVersion::PARQUET_2_0,
        }
    }
}
