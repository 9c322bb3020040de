//! Integration tests on real files
//!
//! Tests the full end-to-end flow: JSON files on disk → unified table → ORC/Parquet → read back

use json2tables::output::{write_table, WriterOptions};
use json2tables::table::table_to_json;
use json2tables::{
    build_table, convert, discover_json_files, read_table, ConvertConfig, ErrorKind, NullDefaults,
    OutputFormat,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_case::test_case;

fn write_file(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, body).unwrap();
    path
}

/// File A has {id, name} and 2 rows, file B has {id, amount} and 3 rows
fn two_file_fixture(dir: &Path) -> Vec<PathBuf> {
    vec![
        write_file(
            dir,
            "a.json",
            "{\"id\": 1, \"name\": \"alice\"}\n{\"id\": 2, \"name\": \"bob\"}\n",
        ),
        write_file(
            dir,
            "b.json",
            "[{\"id\": 3, \"amount\": 1.5}, {\"id\": 4, \"amount\": 2.5}, {\"id\": 5, \"amount\": 3}]",
        ),
    ]
}

fn column_names(batch: &arrow::record_batch::RecordBatch) -> Vec<String> {
    batch
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect()
}

// ============================================================================
// End-to-end conversion
// ============================================================================

#[test_case("table.orc", OutputFormat::Orc ; "orc")]
#[test_case("table.ORC", OutputFormat::Orc ; "orc mixed case")]
#[test_case("table.parquet", OutputFormat::Parquet ; "parquet")]
#[test_case("table.dat", OutputFormat::Parquet ; "unknown extension")]
fn test_convert_two_files(output_name: &str, expected_format: OutputFormat) {
    let dir = TempDir::new().unwrap();
    let inputs = two_file_fixture(dir.path());
    let output = dir.path().join(output_name);

    let report = convert(&ConvertConfig::new(inputs, &output)).unwrap();

    assert_eq!(report.files, 2);
    assert_eq!(report.output.format, expected_format);
    assert_eq!(report.output.rows, 5);
    assert_eq!(report.output.columns, 3);

    let table = read_table(&output).unwrap();
    assert_eq!(column_names(&table), vec!["id", "name", "amount"]);
    assert_eq!(table.num_rows(), 5);

    let rows = table_to_json(&table).unwrap();
    assert_eq!(
        rows,
        vec![
            json!({"id": 1, "name": "alice", "amount": 0.0}),
            json!({"id": 2, "name": "bob", "amount": 0.0}),
            json!({"id": 3, "name": "", "amount": 1.5}),
            json!({"id": 4, "name": "", "amount": 2.5}),
            json!({"id": 5, "name": "", "amount": 3.0}),
        ]
    );
}

#[test]
fn test_convert_single_file_keeps_shape() {
    let dir = TempDir::new().unwrap();
    let body: String = (0..10)
        .map(|i| {
            format!(
                "{}\n",
                json!({"id": i, "label": format!("row-{i}"), "score": f64::from(i) / 2.0, "ok": i % 2 == 0})
            )
        })
        .collect();
    let input = write_file(dir.path(), "only.json", &body);
    let output = dir.path().join("only.parquet");

    let report = convert(&ConvertConfig::new(vec![input], &output)).unwrap();
    assert_eq!(report.output.rows, 10);
    assert_eq!(report.output.columns, 4);

    let table = read_table(&output).unwrap();
    assert_eq!(table.num_rows(), 10);
    assert_eq!(column_names(&table), vec!["id", "label", "score", "ok"]);
    assert_eq!(
        table_to_json(&table).unwrap()[3],
        json!({"id": 3, "label": "row-3", "score": 1.5, "ok": false})
    );
}

#[test]
fn test_convert_custom_null_defaults() {
    let dir = TempDir::new().unwrap();
    let inputs = two_file_fixture(dir.path());
    let output = dir.path().join("table.parquet");

    let defaults = NullDefaults {
        float: -1.0,
        string: "n/a".to_string(),
        ..NullDefaults::default()
    };
    convert(&ConvertConfig::new(inputs, &output).with_null_defaults(defaults)).unwrap();

    let rows = table_to_json(&read_table(&output).unwrap()).unwrap();
    assert_eq!(rows[0]["amount"], json!(-1.0));
    assert_eq!(rows[4]["name"], json!("n/a"));
}

#[test]
fn test_convert_promotes_int_and_float() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        write_file(dir.path(), "1.json", "{\"v\": 1}\n"),
        write_file(dir.path(), "2.json", "{\"v\": 2.5}\n"),
        write_file(dir.path(), "3.json", "{\"v\": \"x\", \"w\": null}\n"),
    ];

    let table = build_table(&ConvertConfig::new(inputs, dir.path().join("t.orc"))).unwrap();
    assert_eq!(
        table_to_json(&table).unwrap(),
        vec![
            json!({"v": "1", "w": ""}),
            json!({"v": "2.5", "w": ""}),
            json!({"v": "x", "w": ""}),
        ]
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_convert_no_input_files() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("table.orc");

    let err = convert(&ConvertConfig::new(vec![], &output)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NoInputFiles);
    assert!(!output.exists());
}

#[test]
fn test_convert_parse_error_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let mut inputs = two_file_fixture(dir.path());
    inputs.push(write_file(dir.path(), "broken.json", "{\"id\": 6,"));
    let output = dir.path().join("table.parquet");

    let err = convert(&ConvertConfig::new(inputs, &output)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("broken.json"));
    assert!(!output.exists());
}

#[test]
fn test_convert_schema_conflict() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        write_file(dir.path(), "a.json", "{\"flag\": true}\n"),
        write_file(dir.path(), "b.json", "{\"flag\": 7}\n"),
    ];
    let output = dir.path().join("table.orc");

    let err = convert(&ConvertConfig::new(inputs, &output)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SchemaConflict);
    assert!(err.to_string().contains("flag"));
    assert!(!output.exists());
}

#[test]
fn test_convert_missing_output_directory() {
    let dir = TempDir::new().unwrap();
    let inputs = two_file_fixture(dir.path());
    let output = dir.path().join("missing").join("table.orc");

    let err = convert(&ConvertConfig::new(inputs, &output)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Write);
    assert!(!output.exists());
}

#[test]
fn test_write_replaces_existing_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("table.parquet");
    fs::write(&output, b"stale").unwrap();

    let table = build_table(&ConvertConfig::new(two_file_fixture(dir.path()), &output)).unwrap();
    write_table(&output, &table, &WriterOptions::default()).unwrap();

    assert_eq!(read_table(&output).unwrap().num_rows(), 5);
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_discover_and_convert_directory() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    write_file(&data, "b.json", "{\"id\": 2}\n");
    write_file(&data, "nested/c.json", "{\"id\": 3, \"tag\": \"deep\"}\n");
    write_file(&data, "a.json", "{\"id\": 1}\n");
    write_file(&data, "notes.txt", "not json");
    write_file(&data, "upper.JSON", "{\"id\": 99}\n");

    let inputs = discover_json_files(&data).unwrap();
    assert_eq!(inputs.len(), 3);

    let output = dir.path().join("all.orc");
    let report = convert(&ConvertConfig::new(inputs, &output)).unwrap();
    assert_eq!(report.output.rows, 3);

    let table = read_table(&output).unwrap();
    let mut ids: Vec<i64> = table_to_json(&table)
        .unwrap()
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_discover_empty_directory_converts_nothing() {
    let dir = TempDir::new().unwrap();
    let inputs = discover_json_files(dir.path()).unwrap();
    assert!(inputs.is_empty());

    let err = convert(&ConvertConfig::new(inputs, dir.path().join("t.orc"))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoInputFiles);
}
