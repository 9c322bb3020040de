//! Column types and the promotion table

use arrow::datatypes::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical type of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// No concrete value seen yet
    Null,
    Integer,
    Float,
    Boolean,
    String,
}

impl ColumnType {
    /// Infer the column type of a single JSON value
    ///
    /// Nested objects and arrays are carried as their JSON text.
    pub fn of_value(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => ColumnType::Null,
            Value::Bool(_) => ColumnType::Boolean,
            Value::Number(n) => {
                if n.is_i64() {
                    ColumnType::Integer
                } else {
                    ColumnType::Float
                }
            }
            Value::String(_) | Value::Array(_) | Value::Object(_) => ColumnType::String,
        }
    }

    /// Combine two types observed for the same column
    ///
    /// Returns `None` for the pairs that have no promotion: boolean mixed with
    /// integer or float.
    ///
    /// | left \ right | Null    | Integer | Float | Boolean | String |
    /// |--------------|---------|---------|-------|---------|--------|
    /// | Null         | Null    | Integer | Float | Boolean | String |
    /// | Integer      | Integer | Integer | Float | -       | String |
    /// | Float        | Float   | Float   | Float | -       | String |
    /// | Boolean      | Boolean | -       | -     | Boolean | String |
    /// | String       | String  | String  | String| String  | String |
    pub fn promote(self, other: ColumnType) -> Option<ColumnType> {
        use ColumnType::{Boolean, Float, Integer, Null, String};

        match (self, other) {
            (a, b) if a == b => Some(a),
            (Null, t) | (t, Null) => Some(t),
            (String, _) | (_, String) => Some(String),
            (Integer, Float) | (Float, Integer) => Some(Float),
            (Boolean, Integer | Float) | (Integer | Float, Boolean) => None,
            _ => None,
        }
    }

    /// Arrow storage type for this column type
    pub fn data_type(self) -> DataType {
        match self {
            ColumnType::Null => DataType::Null,
            ColumnType::Integer => DataType::Int64,
            ColumnType::Float => DataType::Float64,
            ColumnType::Boolean => DataType::Boolean,
            ColumnType::String => DataType::Utf8,
        }
    }

    /// Map an Arrow type back to a column type
    ///
    /// Narrower integer and float widths read back from files map onto the
    /// 64-bit types; anything else is unsupported.
    pub fn from_data_type(data_type: &DataType) -> Option<ColumnType> {
        match data_type {
            DataType::Null => Some(ColumnType::Null),
            DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => {
                Some(ColumnType::Integer)
            }
            DataType::Float16 | DataType::Float32 | DataType::Float64 => Some(ColumnType::Float),
            DataType::Boolean => Some(ColumnType::Boolean),
            DataType::Utf8 | DataType::LargeUtf8 => Some(ColumnType::String),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Null => "null",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
            ColumnType::String => "string",
        };
        f.write_str(name)
    }
}
