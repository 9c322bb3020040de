//! Record decoder module
//!
//! Supports: JSON Lines (including concatenated objects) and top-level JSON arrays
//!
//! # Overview
//!
//! The decode module turns the raw text of one source file into a list of
//! flat JSON objects. The layout is detected from the first non-whitespace
//! character of the file.

mod decoders;
mod types;

pub use decoders::{decode_records, JsonArrayDecoder, JsonLinesDecoder};
pub use types::{DecodeError, RecordDecoder, RecordLayout};
