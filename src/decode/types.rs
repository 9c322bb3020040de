//! Decoder types and traits
//!
//! Defines the core decoder abstractions.

use crate::types::JsonObject;
use thiserror::Error;

/// How records are laid out in a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordLayout {
    /// One JSON object after another, usually one per line (default)
    #[default]
    Lines,
    /// A single top-level JSON array of objects
    Array,
}

impl RecordLayout {
    /// Detect the layout from the file content
    pub fn detect(body: &str) -> Self {
        if body.trim_start().starts_with('[') {
            RecordLayout::Array
        } else {
            RecordLayout::Lines
        }
    }
}

/// Reasons a file cannot be decoded into records
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not valid JSON
    #[error("invalid JSON in record {record}: {source}")]
    Syntax {
        /// 1-based index of the record being read
        record: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A record is valid JSON but not an object
    #[error("record {record} is a JSON {found}, expected an object")]
    NotAnObject {
        /// 1-based index of the offending record
        record: usize,
        /// Kind of JSON value found instead
        found: &'static str,
    },
}

/// Trait for decoding a file body into records
pub trait RecordDecoder {
    /// Decode the full file body into flat records
    fn decode(&self, body: &str) -> Result<Vec<JsonObject>, DecodeError>;
}
