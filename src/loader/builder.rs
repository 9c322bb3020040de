//! JSON records to Arrow columns

use crate::error::{Error, Result};
use crate::table::value_text;
use crate::types::{JsonObject, JsonValue};
use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, NullArray, StringArray};
use arrow::datatypes::{DataType, SchemaRef};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use std::sync::Arc;

/// Build a RecordBatch from records following `schema`
///
/// A key missing from a record, or an explicit `null`, becomes a null cell.
pub fn records_to_batch(records: &[JsonObject], schema: SchemaRef) -> Result<RecordBatch> {
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(schema.fields().len());

    for field in schema.fields() {
        let values: Vec<Option<&JsonValue>> = records
            .iter()
            .map(|record| record.get(field.name()).filter(|v| !v.is_null()))
            .collect();

        columns.push(build_array(&values, field.data_type())?);
    }

    let options = RecordBatchOptions::new().with_row_count(Some(records.len()));
    Ok(RecordBatch::try_new_with_options(schema, columns, &options)?)
}

/// Build an Arrow array from JSON values
fn build_array(values: &[Option<&JsonValue>], data_type: &DataType) -> Result<ArrayRef> {
    match data_type {
        DataType::Null => Ok(Arc::new(NullArray::new(values.len()))),

        DataType::Boolean => {
            let arr: BooleanArray = values
                .iter()
                .map(|v| v.and_then(JsonValue::as_bool))
                .collect();
            Ok(Arc::new(arr))
        }

        DataType::Int64 => {
            let arr: Int64Array = values.iter().map(|v| v.and_then(JsonValue::as_i64)).collect();
            Ok(Arc::new(arr))
        }

        DataType::Float64 => {
            let arr: Float64Array = values.iter().map(|v| v.and_then(JsonValue::as_f64)).collect();
            Ok(Arc::new(arr))
        }

        DataType::Utf8 => {
            let arr: StringArray = values.iter().map(|v| v.map(value_text)).collect();
            Ok(Arc::new(arr))
        }

        other => Err(Error::Other(format!(
            "Cannot build a column of type {other} from JSON"
        ))),
    }
}
