//! CLI commands and argument parsing

use crate::types::{CompressionCodec, ParquetFlavor, ParquetVersion};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate an ORC/Parquet table file from a directory of flat JSON files
#[derive(Parser, Debug)]
#[command(name = "json2tables")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// How results are printed
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: DisplayFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every .json file under a directory into one table file
    Convert {
        /// Directory containing the JSON files (searched recursively)
        #[arg(short = 'i', long = "jsons", value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output file; a .orc extension writes ORC, anything else Parquet
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Job file (YAML or JSON); flags override its values
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// ORC compression codec
        #[arg(long)]
        compression: Option<CompressionCodec>,

        /// Parquet compression codec
        #[arg(long)]
        parquet_compression: Option<CompressionCodec>,

        /// Parquet compatibility flavor
        #[arg(long)]
        flavor: Option<ParquetFlavor>,

        /// Parquet format version
        #[arg(long)]
        parquet_version: Option<ParquetVersion>,
    },

    /// Show the schema and row count of an ORC/Parquet file
    Inspect {
        /// File to read
        file: PathBuf,

        /// Number of rows to preview
        #[arg(long, default_value = "10")]
        rows: usize,
    },
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DisplayFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
