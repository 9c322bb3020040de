//! Schema inference tests

use super::*;
use crate::error::ErrorKind;
use crate::types::JsonObject;
use arrow::datatypes::{DataType, Field, Schema};
use serde_json::json;
use std::path::Path;
use test_case::test_case;

fn objects(values: Vec<serde_json::Value>) -> Vec<JsonObject> {
    values
        .into_iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect()
}

fn names(schema: &Schema) -> Vec<&str> {
    schema.fields().iter().map(|f| f.name().as_str()).collect()
}

// ============================================================================
// Promotion Table
// ============================================================================

#[test_case(ColumnType::Null, ColumnType::Null, Some(ColumnType::Null))]
#[test_case(ColumnType::Null, ColumnType::Integer, Some(ColumnType::Integer))]
#[test_case(ColumnType::Null, ColumnType::Float, Some(ColumnType::Float))]
#[test_case(ColumnType::Null, ColumnType::Boolean, Some(ColumnType::Boolean))]
#[test_case(ColumnType::Null, ColumnType::String, Some(ColumnType::String))]
#[test_case(ColumnType::Integer, ColumnType::Integer, Some(ColumnType::Integer))]
#[test_case(ColumnType::Integer, ColumnType::Float, Some(ColumnType::Float))]
#[test_case(ColumnType::Integer, ColumnType::Boolean, None)]
#[test_case(ColumnType::Integer, ColumnType::String, Some(ColumnType::String))]
#[test_case(ColumnType::Float, ColumnType::Float, Some(ColumnType::Float))]
#[test_case(ColumnType::Float, ColumnType::Boolean, None)]
#[test_case(ColumnType::Float, ColumnType::String, Some(ColumnType::String))]
#[test_case(ColumnType::Boolean, ColumnType::Boolean, Some(ColumnType::Boolean))]
#[test_case(ColumnType::Boolean, ColumnType::String, Some(ColumnType::String))]
#[test_case(ColumnType::String, ColumnType::String, Some(ColumnType::String))]
fn test_promote(left: ColumnType, right: ColumnType, expected: Option<ColumnType>) {
    assert_eq!(left.promote(right), expected);
    // The table is symmetric
    assert_eq!(right.promote(left), expected);
}

#[test]
fn test_of_value() {
    assert_eq!(ColumnType::of_value(&json!(null)), ColumnType::Null);
    assert_eq!(ColumnType::of_value(&json!(true)), ColumnType::Boolean);
    assert_eq!(ColumnType::of_value(&json!(42)), ColumnType::Integer);
    assert_eq!(ColumnType::of_value(&json!(-7)), ColumnType::Integer);
    assert_eq!(ColumnType::of_value(&json!(2.5)), ColumnType::Float);
    assert_eq!(ColumnType::of_value(&json!(u64::MAX)), ColumnType::Float);
    assert_eq!(ColumnType::of_value(&json!("x")), ColumnType::String);
    assert_eq!(ColumnType::of_value(&json!([1, 2])), ColumnType::String);
    assert_eq!(ColumnType::of_value(&json!({"a": 1})), ColumnType::String);
}

#[test]
fn test_data_type_mapping() {
    for column_type in [
        ColumnType::Null,
        ColumnType::Integer,
        ColumnType::Float,
        ColumnType::Boolean,
        ColumnType::String,
    ] {
        assert_eq!(
            ColumnType::from_data_type(&column_type.data_type()),
            Some(column_type)
        );
    }
    assert_eq!(
        ColumnType::from_data_type(&DataType::Int32),
        Some(ColumnType::Integer)
    );
    assert_eq!(ColumnType::from_data_type(&DataType::Binary), None);
}

// ============================================================================
// Per-file Inference
// ============================================================================

#[test]
fn test_infer_schema_first_seen_order() {
    let records = objects(vec![
        json!({"id": 1, "name": "Alice"}),
        json!({"name": "Bob", "email": "bob@example.com", "id": 2}),
    ]);

    let schema = infer_schema(&records, Path::new("a.json")).unwrap();

    assert_eq!(names(&schema), vec!["id", "name", "email"]);
    assert!(schema.fields().iter().all(|f| f.is_nullable()));
}

#[test]
fn test_infer_schema_types() {
    let records = objects(vec![json!({
        "id": 1,
        "price": 9.99,
        "active": true,
        "name": "widget",
        "missing": null
    })]);

    let schema = infer_schema(&records, Path::new("a.json")).unwrap();

    assert_eq!(schema.field(0).data_type(), &DataType::Int64);
    assert_eq!(schema.field(1).data_type(), &DataType::Float64);
    assert_eq!(schema.field(2).data_type(), &DataType::Boolean);
    assert_eq!(schema.field(3).data_type(), &DataType::Utf8);
    assert_eq!(schema.field(4).data_type(), &DataType::Null);
}

#[test]
fn test_infer_schema_promotes_within_file() {
    let records = objects(vec![
        json!({"value": 42, "label": null}),
        json!({"value": 3.14, "label": 7}),
        json!({"label": "seven"}),
    ]);

    let schema = infer_schema(&records, Path::new("a.json")).unwrap();

    assert_eq!(schema.field(0).data_type(), &DataType::Float64);
    assert_eq!(schema.field(1).data_type(), &DataType::Utf8);
}

#[test]
fn test_infer_schema_conflict_names_column_and_file() {
    let records = objects(vec![json!({"flag": true}), json!({"flag": 1})]);

    let err = infer_schema(&records, Path::new("data/flags.json")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SchemaConflict);
    match err {
        crate::Error::SchemaConflict {
            column,
            left,
            right,
            path,
        } => {
            assert_eq!(column, "flag");
            assert_eq!(left, "boolean");
            assert_eq!(right, "integer");
            assert_eq!(path, Path::new("data/flags.json"));
        }
        other => panic!("Expected SchemaConflict, got {other:?}"),
    }
}

#[test]
fn test_infer_schema_empty() {
    let schema = infer_schema(&[], Path::new("empty.json")).unwrap();
    assert!(schema.fields().is_empty());
}

// ============================================================================
// Schema Union
// ============================================================================

#[test]
fn test_union_schema_disjoint() {
    let left = Schema::new(vec![
        Field::new("id", DataType::Int64, true),
        Field::new("name", DataType::Utf8, true),
    ]);
    let right = Schema::new(vec![
        Field::new("id", DataType::Int64, true),
        Field::new("amount", DataType::Float64, true),
    ]);

    let merged = union_schema(&left, &right, Path::new("b.json")).unwrap();

    assert_eq!(names(&merged), vec!["id", "name", "amount"]);
    assert!(merged.fields().iter().all(|f| f.is_nullable()));
}

#[test]
fn test_union_schema_promotes() {
    let left = Schema::new(vec![Field::new("value", DataType::Int64, true)]);
    let right = Schema::new(vec![Field::new("value", DataType::Float64, true)]);

    let merged = union_schema(&left, &right, Path::new("b.json")).unwrap();
    assert_eq!(merged.field(0).data_type(), &DataType::Float64);

    let right = Schema::new(vec![Field::new("value", DataType::Utf8, true)]);
    let merged = union_schema(&left, &right, Path::new("b.json")).unwrap();
    assert_eq!(merged.field(0).data_type(), &DataType::Utf8);
}

#[test]
fn test_union_schema_conflict() {
    let left = Schema::new(vec![Field::new("flag", DataType::Boolean, true)]);
    let right = Schema::new(vec![Field::new("flag", DataType::Float64, true)]);

    let err = union_schema(&left, &right, Path::new("b.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaConflict);
}

#[test]
fn test_union_schema_with_empty() {
    let left = Schema::empty();
    let right = Schema::new(vec![Field::new("id", DataType::Int64, true)]);

    let merged = union_schema(&left, &right, Path::new("b.json")).unwrap();
    assert_eq!(names(&merged), vec!["id"]);
}
