//! Schema inference from JSON records and schema union

use super::types::ColumnType;
use crate::error::{Error, Result};
use crate::types::JsonObject;
use arrow::datatypes::{Field, Schema};
use std::collections::HashMap;
use std::path::Path;

/// Ordered set of named column types under construction
///
/// Keeps columns in first-seen order while allowing lookup by name.
#[derive(Debug, Default)]
struct ColumnSet {
    columns: Vec<(String, ColumnType)>,
    index: HashMap<String, usize>,
}

impl ColumnSet {
    fn observe(&mut self, name: &str, column_type: ColumnType, path: &Path) -> Result<()> {
        match self.index.get(name) {
            Some(&idx) => {
                let existing = self.columns[idx].1;
                self.columns[idx].1 = existing
                    .promote(column_type)
                    .ok_or_else(|| Error::schema_conflict(name, existing, column_type, path))?;
            }
            None => {
                self.index.insert(name.to_string(), self.columns.len());
                self.columns.push((name.to_string(), column_type));
            }
        }
        Ok(())
    }

    fn into_schema(self) -> Schema {
        let fields: Vec<Field> = self
            .columns
            .into_iter()
            .map(|(name, column_type)| Field::new(name, column_type.data_type(), true))
            .collect();
        Schema::new(fields)
    }
}

/// Infer an Arrow schema from the records of one source file
///
/// Columns appear in the order their keys are first seen. Every field is
/// nullable: a key missing from a record is a null for that row.
pub fn infer_schema(records: &[JsonObject], path: &Path) -> Result<Schema> {
    let mut columns = ColumnSet::default();

    for record in records {
        for (key, value) in record {
            columns.observe(key, ColumnType::of_value(value), path)?;
        }
    }

    Ok(columns.into_schema())
}

/// Union of two schemas by column name
///
/// Columns of `left` come first in their order, followed by the columns only
/// `right` has. Shared columns get the promoted type; `path` names the source
/// blamed when a pair cannot be promoted.
pub fn union_schema(left: &Schema, right: &Schema, path: &Path) -> Result<Schema> {
    let mut columns = ColumnSet::default();

    for field in left.fields().iter().chain(right.fields().iter()) {
        let column_type = column_type_of(field)?;
        columns.observe(field.name(), column_type, path)?;
    }

    Ok(columns.into_schema())
}

/// Column type of an Arrow field
pub fn column_type_of(field: &Field) -> Result<ColumnType> {
    ColumnType::from_data_type(field.data_type()).ok_or_else(|| {
        Error::Other(format!(
            "Column '{}' has unsupported type {}",
            field.name(),
            field.data_type()
        ))
    })
}
