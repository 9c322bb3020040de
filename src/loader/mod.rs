//! Record loader module
//!
//! Parses one JSON source file into a table.
//!
//! # Overview
//!
//! Loading a file is three steps:
//! - decode the text into flat JSON objects (see [`crate::decode`])
//! - infer a schema from the keys and value types of that file only
//! - build one Arrow column per inferred field
//!
//! Loading never writes anything; the only side effect is reading the file.

mod builder;

pub use builder::records_to_batch;

use crate::decode::decode_records;
use crate::error::{Error, Result};
use crate::schema::infer_schema;
use crate::table::SourceTable;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Load one JSON source file into a table
pub fn load_table(path: impl AsRef<Path>) -> Result<SourceTable> {
    let path = path.as_ref();

    let body = fs::read_to_string(path)
        .map_err(|e| Error::parse(path, format!("failed to read file: {e}")))?;

    let records = decode_records(&body).map_err(|e| Error::parse(path, e.to_string()))?;
    let schema = Arc::new(infer_schema(&records, path)?);
    let batch = records_to_batch(&records, schema)?;

    debug!(
        path = %path.display(),
        rows = batch.num_rows(),
        columns = batch.num_columns(),
        "Loaded source file"
    );

    Ok(SourceTable::new(path, batch))
}

/// Load every source file in order
///
/// Stops at the first file that fails to load.
pub fn load_tables<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<SourceTable>> {
    paths.iter().map(load_table).collect()
}
