//! Schema module
//!
//! Column types, per-file schema inference and schema union.
//!
//! # Features
//!
//! - **Type Inference**: Infers a column type from each JSON value
//! - **Ordered Columns**: Columns keep first-seen key order
//! - **Type Promotion**: A fixed promotion table combines conflicting types
//! - **Schema Union**: Merges two schemas by column name

mod inference;
mod types;

pub use inference::{column_type_of, infer_schema, union_schema};
pub use types::ColumnType;

#[cfg(test)]
mod tests;
