//! # json2tables
//!
//! Generate a single ORC or Parquet table file from a collection of flat
//! JSON files.
//!
//! Each input file is loaded into its own Arrow table with an inferred
//! schema. The tables are unified into one schema (missing columns become
//! nulls, compatible types are promoted), nulls are replaced with typed
//! defaults, and the result is written atomically in the format chosen by
//! the output file extension.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use json2tables::{convert, discover_json_files, ConvertConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let inputs = discover_json_files("data/events")?;
//!     let report = convert(&ConvertConfig::new(inputs, "out/events.orc"))?;
//!     println!("{} rows written", report.output.rows);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌───────────┐   ┌──────────┐
//! │ discover │ → │   load   │ → │  unify   │ → │ normalize │ → │  output  │
//! ├──────────┤   ├──────────┤   ├──────────┤   ├───────────┤   ├──────────┤
//! │ *.json   │   │ decode   │   │ schemas  │   │ null      │   │ ORC      │
//! │ sorted   │   │ infer    │   │ promote  │   │ defaults  │   │ Parquet  │
//! │          │   │ build    │   │ concat   │   │           │   │ atomic   │
//! └──────────┘   └──────────┘   └──────────┘   └───────────┘   └──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
// Allow common clippy pedantic lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Column types, inference and promotion
pub mod schema;

/// JSON record decoders
pub mod decode;

/// Per-file table loading
pub mod loader;

/// In-memory tables
pub mod table;

/// Schema unification and concatenation
pub mod unify;

/// Null default filling
pub mod normalize;

/// ORC/Parquet output
pub mod output;

/// Input file discovery
pub mod discovery;

/// Pipeline and job configuration
pub mod config;

/// The end-to-end conversion
pub mod pipeline;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use types::*;

pub use config::{ConvertConfig, JobFile};
pub use discovery::discover_json_files;
pub use loader::{load_table, load_tables};
pub use normalize::{fill_nulls, NullDefaults};
pub use output::{read_table, write_table, WriteReport, WriterOptions};
pub use pipeline::{build_table, convert, ConversionReport};
pub use schema::ColumnType;
pub use table::SourceTable;
pub use unify::{unify_schemas, unify_tables};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
