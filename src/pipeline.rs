//! Conversion pipeline
//!
//! paths → load (one table per file) → unify → fill nulls → write.
//! Any failure aborts the run and no output file is left behind.

use crate::config::ConvertConfig;
use crate::error::{Error, Result};
use crate::loader::load_tables;
use crate::normalize::fill_nulls;
use crate::output::{write_table, WriteReport};
use crate::unify::unify_tables;
use arrow::record_batch::RecordBatch;
use std::time::Instant;
use tracing::info;

/// Summary of a completed conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Number of source files read
    pub files: usize,
    /// What was written
    pub output: WriteReport,
}

/// Load, unify and normalize the inputs without writing anything
pub fn build_table(config: &ConvertConfig) -> Result<RecordBatch> {
    if config.input_paths.is_empty() {
        return Err(Error::NoInputFiles);
    }

    let tables = load_tables(&config.input_paths)?;
    let unified = unify_tables(&tables)?;
    drop(tables);

    fill_nulls(&unified, &config.null_defaults)
}

/// Run a full conversion
pub fn convert(config: &ConvertConfig) -> Result<ConversionReport> {
    config.validate()?;
    let start = Instant::now();

    info!(files = config.input_paths.len(), "Loading JSON files");
    let table = build_table(config)?;

    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "Unified table"
    );

    let output = write_table(&config.output_path, &table, &config.writer)?;

    info!(
        path = %output.path.display(),
        format = %output.format,
        rows = output.rows,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Conversion finished"
    );

    Ok(ConversionReport {
        files: config.input_paths.len(),
        output,
    })
}
