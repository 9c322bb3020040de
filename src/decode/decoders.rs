//! Decoder implementations
//!
//! Each decoder handles a specific record layout.

use super::types::{DecodeError, RecordDecoder, RecordLayout};
use crate::types::{JsonObject, JsonValue};
use serde_json::Value;

// ============================================================================
// JSON Lines Decoder
// ============================================================================

/// JSON Lines decoder
///
/// Reads a stream of JSON values separated by any whitespace, so both one
/// object per line and pretty-printed objects back to back are accepted.
#[derive(Debug, Clone, Default)]
pub struct JsonLinesDecoder;

impl JsonLinesDecoder {
    /// Create a new JSON Lines decoder
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for JsonLinesDecoder {
    fn decode(&self, body: &str) -> Result<Vec<JsonObject>, DecodeError> {
        let stream = serde_json::Deserializer::from_str(body).into_iter::<Value>();
        let mut records = Vec::new();

        for (idx, value) in stream.enumerate() {
            let record = idx + 1;
            let value = value.map_err(|source| DecodeError::Syntax { record, source })?;
            records.push(into_object(value, record)?);
        }

        Ok(records)
    }
}

// ============================================================================
// JSON Array Decoder
// ============================================================================

/// Decoder for a single top-level array of objects
#[derive(Debug, Clone, Default)]
pub struct JsonArrayDecoder;

impl JsonArrayDecoder {
    /// Create a new JSON array decoder
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for JsonArrayDecoder {
    fn decode(&self, body: &str) -> Result<Vec<JsonObject>, DecodeError> {
        let values: Vec<Value> = serde_json::from_str(body)
            .map_err(|source| DecodeError::Syntax { record: 1, source })?;

        values
            .into_iter()
            .enumerate()
            .map(|(idx, value)| into_object(value, idx + 1))
            .collect()
    }
}

/// Decode a file body, detecting its layout
pub fn decode_records(body: &str) -> Result<Vec<JsonObject>, DecodeError> {
    match RecordLayout::detect(body) {
        RecordLayout::Lines => JsonLinesDecoder::new().decode(body),
        RecordLayout::Array => JsonArrayDecoder::new().decode(body),
    }
}

fn into_object(value: JsonValue, record: usize) -> Result<JsonObject, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::NotAnObject {
            record,
            found: value_kind(&other),
        }),
    }
}

fn value_kind(value: &JsonValue) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
