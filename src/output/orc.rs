//! ORC file writer

use super::sink::OutputSink;
use crate::error::{Error, Result};
use crate::types::CompressionCodec;
use arrow::record_batch::RecordBatch;
use orc_rust::arrow_writer::ArrowWriterBuilder;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Configuration for ORC writer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrcWriterConfig {
    compression: CompressionCodec,
}

impl Default for OrcWriterConfig {
    fn default() -> Self {
        Self {
            compression: CompressionCodec::Zstd,
        }
    }
}

impl OrcWriterConfig {
    /// Create a new config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set compression codec
    #[must_use]
    pub fn with_compression(mut self, compression: CompressionCodec) -> Self {
        self.compression = compression;
        self
    }

    /// Get requested compression codec
    #[must_use]
    pub fn compression(&self) -> CompressionCodec {
        self.compression
    }

    /// Codec the ORC writer actually applies
    ///
    /// orc-rust's writer only emits uncompressed stripes, so this is always
    /// [`CompressionCodec::None`] whatever was requested.
    #[must_use]
    pub fn applied_compression(&self) -> CompressionCodec {
        CompressionCodec::None
    }
}

/// Write a table to an ORC file
///
/// The file appears at `path` only once it is complete. Returns the number of
/// rows written.
pub fn write_orc(
    path: impl AsRef<Path>,
    batch: &RecordBatch,
    config: &OrcWriterConfig,
) -> Result<usize> {
    let path = path.as_ref();
    let mut sink = OutputSink::open(path)?;

    let applied = config.applied_compression();
    if config.compression() != applied {
        warn!(
            path = %path.display(),
            requested = %config.compression(),
            applied = %applied,
            "ORC writer does not support compression; writing uncompressed stripes"
        );
    }

    // TODO: pass `config.compression` to the builder once orc-rust's writer
    // exposes a compression option.
    let mut writer = ArrowWriterBuilder::new(sink.file_mut(), batch.schema())
        .try_build()
        .map_err(|e| Error::write(path, format!("failed to create ORC writer: {e}")))?;

    writer
        .write(batch)
        .map_err(|e| Error::write(path, format!("failed to write batch: {e}")))?;

    writer
        .close()
        .map_err(|e| Error::write(path, format!("failed to close ORC writer: {e}")))?;

    sink.commit()?;

    debug!(
        path = %path.display(),
        rows = batch.num_rows(),
        compression = %applied,
        "Wrote ORC file"
    );

    Ok(batch.num_rows())
}
