//! Schema-unifying accumulator
//!
//! Concatenates per-file tables into one table whose schema is the union of
//! every input schema.
//!
//! # Algorithm
//!
//! Two phases, so every input is re-aligned exactly once:
//! 1. Fold the input schemas with [`union_schema`], seeded with the first
//!    table's schema. A single input therefore yields its own schema unchanged.
//! 2. Re-align each table to the union schema (convert shared columns to the
//!    promoted type, rendering scalars widened to string exactly as the loader
//!    does, null-fill columns the table lacks) and concatenate all
//!    rows in input order.

use crate::error::{Error, Result};
use crate::schema::union_schema;
use crate::table::{float_text, SourceTable};
use arrow::array::{new_null_array, ArrayRef, AsArray, StringArray};
use arrow::compute::{cast, concat_batches};
use arrow::datatypes::{DataType, Float64Type, Int64Type, SchemaRef};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use std::sync::Arc;
use tracing::debug;

/// Union of the schemas of all tables, in input order
pub fn unify_schemas(tables: &[SourceTable]) -> Result<SchemaRef> {
    let (first, rest) = tables.split_first().ok_or(Error::NoInputFiles)?;

    rest.iter().try_fold(first.batch().schema(), |acc, table| {
        let merged = union_schema(&acc, &table.batch().schema(), table.path())?;
        Ok(Arc::new(merged))
    })
}

/// Concatenate tables under their union schema
///
/// Rows keep input order: all rows of the first table, then the second, and
/// so on. Cells of columns a table does not have are null.
pub fn unify_tables(tables: &[SourceTable]) -> Result<RecordBatch> {
    let schema = unify_schemas(tables)?;

    let aligned = tables
        .iter()
        .map(|table| align_table(table, &schema))
        .collect::<Result<Vec<_>>>()?;

    let unified = concat_batches(&schema, &aligned)?;

    debug!(
        tables = tables.len(),
        rows = unified.num_rows(),
        columns = unified.num_columns(),
        "Unified tables"
    );

    Ok(unified)
}

/// Re-align one table to `schema`
fn align_table(table: &SourceTable, schema: &SchemaRef) -> Result<RecordBatch> {
    let batch = table.batch();
    if batch.schema() == *schema {
        return Ok(batch.clone());
    }

    let num_rows = batch.num_rows();
    let source_schema = batch.schema();

    let columns = schema
        .fields()
        .iter()
        .map(|field| -> Result<ArrayRef> {
            match source_schema.index_of(field.name()) {
                Ok(idx) => {
                    let column = batch.column(idx);
                    if column.data_type() == field.data_type() {
                        Ok(Arc::clone(column))
                    } else if let Some(text) = text_column(column, field.data_type()) {
                        Ok(text)
                    } else {
                        Ok(cast(column, field.data_type())?)
                    }
                }
                Err(_) => Ok(new_null_array(field.data_type(), num_rows)),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let options = RecordBatchOptions::new().with_row_count(Some(num_rows));
    Ok(RecordBatch::try_new_with_options(
        Arc::clone(schema),
        columns,
        &options,
    )?)
}

/// Render a scalar column as strings the way the loader renders JSON values
///
/// Returns `None` when `target` is not a string type or the column has no
/// scalar rendering of its own.
fn text_column(column: &ArrayRef, target: &DataType) -> Option<ArrayRef> {
    if *target != DataType::Utf8 {
        return None;
    }

    let text: StringArray = match column.data_type() {
        DataType::Int64 => column
            .as_primitive::<Int64Type>()
            .iter()
            .map(|v| v.map(|v| v.to_string()))
            .collect(),
        DataType::Float64 => column
            .as_primitive::<Float64Type>()
            .iter()
            .map(|v| v.map(float_text))
            .collect(),
        DataType::Boolean => column
            .as_boolean()
            .iter()
            .map(|v| v.map(|v| v.to_string()))
            .collect(),
        _ => return None,
    };

    Some(Arc::new(text))
}
