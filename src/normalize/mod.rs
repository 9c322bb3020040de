//! Null normalizer
//!
//! Replaces every null cell of the unified table with a default chosen by the
//! column's type. Columns that never held a concrete value (type `Null`) are
//! written as string columns filled with the string default, since neither
//! ORC nor Parquet can store non-null values in an untyped column.
//!
//! The output schema marks every field non-nullable.

use crate::error::{Error, Result};
use crate::schema::{column_type_of, ColumnType};
use arrow::array::{
    Array, ArrayRef, AsArray, BooleanArray, Float64Array, Int64Array, StringArray,
};
use arrow::datatypes::{Field, Float64Type, Int64Type, Schema};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default value per column type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullDefaults {
    pub integer: i64,
    pub float: f64,
    pub boolean: bool,
    pub string: String,
}

impl Default for NullDefaults {
    fn default() -> Self {
        Self {
            integer: 0,
            float: 0.0,
            boolean: false,
            string: String::new(),
        }
    }
}

/// Column type a column has after normalization
pub fn normalized_type(column_type: ColumnType) -> ColumnType {
    match column_type {
        ColumnType::Null => ColumnType::String,
        other => other,
    }
}

/// Replace all nulls in `batch` with typed defaults
pub fn fill_nulls(batch: &RecordBatch, defaults: &NullDefaults) -> Result<RecordBatch> {
    let schema = batch.schema();
    let mut fields = Vec::with_capacity(schema.fields().len());
    let mut columns = Vec::with_capacity(schema.fields().len());

    for (field, column) in schema.fields().iter().zip(batch.columns()) {
        let column_type = column_type_of(field)?;
        let filled = fill_column(column, column_type, defaults)?;

        fields.push(Field::new(
            field.name(),
            normalized_type(column_type).data_type(),
            false,
        ));
        columns.push(filled);
    }

    let options = RecordBatchOptions::new().with_row_count(Some(batch.num_rows()));
    Ok(RecordBatch::try_new_with_options(
        Arc::new(Schema::new(fields)),
        columns,
        &options,
    )?)
}

fn fill_column(
    column: &ArrayRef,
    column_type: ColumnType,
    defaults: &NullDefaults,
) -> Result<ArrayRef> {
    if column_type != ColumnType::Null && column.null_count() == 0 {
        return Ok(Arc::clone(column));
    }

    let filled: ArrayRef = match column_type {
        ColumnType::Null => Arc::new(StringArray::from(vec![
            defaults.string.as_str();
            column.len()
        ])),
        ColumnType::Integer => {
            let arr: Int64Array = column
                .as_primitive_opt::<Int64Type>()
                .ok_or_else(|| unexpected_storage(column, column_type))?
                .iter()
                .map(|v| Some(v.unwrap_or(defaults.integer)))
                .collect();
            Arc::new(arr)
        }
        ColumnType::Float => {
            let arr: Float64Array = column
                .as_primitive_opt::<Float64Type>()
                .ok_or_else(|| unexpected_storage(column, column_type))?
                .iter()
                .map(|v| Some(v.unwrap_or(defaults.float)))
                .collect();
            Arc::new(arr)
        }
        ColumnType::Boolean => {
            let arr: BooleanArray = column
                .as_boolean_opt()
                .ok_or_else(|| unexpected_storage(column, column_type))?
                .iter()
                .map(|v| Some(v.unwrap_or(defaults.boolean)))
                .collect();
            Arc::new(arr)
        }
        ColumnType::String => {
            let arr: StringArray = column
                .as_string_opt::<i32>()
                .ok_or_else(|| unexpected_storage(column, column_type))?
                .iter()
                .map(|v| Some(v.unwrap_or(defaults.string.as_str())))
                .collect();
            Arc::new(arr)
        }
    };

    Ok(filled)
}

fn unexpected_storage(column: &ArrayRef, column_type: ColumnType) -> Error {
    Error::Other(format!(
        "Expected {} storage for a {column_type} column, found {}",
        column_type.data_type(),
        column.data_type()
    ))
}
