//! In-memory tables
//!
//! A table is an Arrow [`RecordBatch`]: equal-length columns sharing one
//! schema, with the validity bitmap acting as the null marker.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Float64Type, Int64Type};
use arrow::record_batch::RecordBatch;
use std::path::{Path, PathBuf};

/// A table loaded from one source file
#[derive(Debug, Clone)]
pub struct SourceTable {
    path: PathBuf,
    batch: RecordBatch,
}

impl SourceTable {
    /// Create a source table
    pub fn new(path: impl Into<PathBuf>, batch: RecordBatch) -> Self {
        Self {
            path: path.into(),
            batch,
        }
    }

    /// File the table was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Table contents
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    /// Take the table contents
    pub fn into_batch(self) -> RecordBatch {
        self.batch
    }
}

/// Largest magnitude below which every integral f64 is an exact integer
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Text of a float stored in a string column
///
/// Integral values print without a fraction, so a value that was `1` in the
/// source reads `"1"` whether or not its column was widened to float first.
pub fn float_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        return (value as i64).to_string();
    }
    serde_json::Number::from_f64(value).map_or_else(|| value.to_string(), |n| n.to_string())
}

/// Text of a JSON value stored in a string column
///
/// Strings are taken as-is, numbers and booleans by their literal, nested
/// values as compact JSON.
pub fn value_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) if n.is_f64() => n.as_f64().map_or_else(|| n.to_string(), float_text),
        other => other.to_string(),
    }
}

/// Convert a table to JSON records
///
/// Returns one JSON object per row, keys in column order. Nulls become JSON `null`.
pub fn table_to_json(batch: &RecordBatch) -> Result<Vec<JsonValue>> {
    let schema = batch.schema();
    let mut records = Vec::with_capacity(batch.num_rows());

    for row in 0..batch.num_rows() {
        let mut record = serde_json::Map::new();
        for (idx, field) in schema.fields().iter().enumerate() {
            let value = cell_to_json(batch.column(idx).as_ref(), row)?;
            record.insert(field.name().clone(), value);
        }
        records.push(JsonValue::Object(record));
    }

    Ok(records)
}

/// Convert a single cell to JSON
fn cell_to_json(array: &dyn Array, row: usize) -> Result<JsonValue> {
    if array.is_null(row) {
        return Ok(JsonValue::Null);
    }

    let value = match array.data_type() {
        DataType::Null => JsonValue::Null,
        DataType::Boolean => JsonValue::Bool(array.as_boolean().value(row)),
        DataType::Int64 => JsonValue::from(array.as_primitive::<Int64Type>().value(row)),
        DataType::Float64 => {
            let val = array.as_primitive::<Float64Type>().value(row);
            serde_json::Number::from_f64(val).map_or(JsonValue::Null, JsonValue::Number)
        }
        DataType::Utf8 => JsonValue::String(array.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => JsonValue::String(array.as_string::<i64>().value(row).to_string()),
        other => {
            return Err(Error::Other(format!(
                "Cannot convert column of type {other} to JSON"
            )))
        }
    };

    Ok(value)
}
