//! Read an output file back into a table

use crate::error::{Error, Result};
use crate::types::OutputFormat;
use arrow::compute::concat_batches;
use arrow::record_batch::{RecordBatch, RecordBatchReader};
use orc_rust::arrow_reader::ArrowReaderBuilder;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Read an ORC or Parquet file into a single table
///
/// The format is chosen from the extension the same way the writer chooses it.
pub fn read_table(path: impl AsRef<Path>) -> Result<RecordBatch> {
    let path = path.as_ref();
    let file = File::open(path)?;

    match OutputFormat::from_path(path) {
        OutputFormat::Orc => {
            let reader = ArrowReaderBuilder::try_new(file)
                .map_err(Error::orc)?
                .build();
            collect_batches(reader)
        }
        OutputFormat::Parquet => {
            let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
            collect_batches(reader)
        }
    }
}

fn collect_batches(reader: impl RecordBatchReader) -> Result<RecordBatch> {
    let schema = reader.schema();
    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(concat_batches(&schema, &batches)?)
}
