//! Output module
//!
//! Serializes the final table to ORC or Parquet.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Picking the format from the output path
//! - Writing Parquet files (compression, Spark flavor, format version)
//! - Writing ORC files
//! - Reading a written file back into a table
//!
//! Both writers go through an atomic sink, so a failed write leaves no file
//! at the destination.

mod orc;
mod reader;
mod sink;
mod writer;

pub use orc::{write_orc, OrcWriterConfig};
pub use reader::read_table;
pub use sink::OutputSink;
pub use writer::{spark_column_name, write_parquet, ParquetWriterConfig};

use crate::error::{Error, Result};
use crate::types::OutputFormat;
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writer options for both formats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    pub orc: OrcWriterConfig,
    pub parquet: ParquetWriterConfig,
}

/// Summary of a completed write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub rows: usize,
    pub columns: usize,
}

/// Write a table, choosing ORC or Parquet from the path's extension
pub fn write_table(
    path: impl AsRef<Path>,
    batch: &RecordBatch,
    options: &WriterOptions,
) -> Result<WriteReport> {
    let path = path.as_ref();
    if batch.num_columns() == 0 {
        return Err(Error::write(path, "table has no columns"));
    }

    let format = OutputFormat::from_path(path);
    info!(path = %path.display(), %format, "Writing output file");

    let rows = match format {
        OutputFormat::Orc => write_orc(path, batch, &options.orc)?,
        OutputFormat::Parquet => write_parquet(path, batch, &options.parquet)?,
    };

    Ok(WriteReport {
        path: path.to_path_buf(),
        format,
        rows,
        columns: batch.num_columns(),
    })
}
