//! CLI module
//!
//! Command-line interface around the conversion pipeline.
//!
//! # Commands
//!
//! - `convert` - Convert a directory of JSON files into one ORC/Parquet file
//! - `inspect` - Show the schema and row count of an output file

mod commands;
mod logging;
mod runner;

pub use commands::{Cli, Commands, DisplayFormat};
pub use logging::log_filter;
pub use runner::{ConvertArgs, Runner};
