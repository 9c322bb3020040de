//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, DisplayFormat};
use crate::config::{ConvertConfig, JobFile};
use crate::discovery::discover_json_files;
use crate::error::{Error, Result, ResultExt};
use crate::output::read_table;
use crate::pipeline::{convert, ConversionReport};
use crate::schema::column_type_of;
use crate::table::table_to_json;
use crate::types::{CompressionCodec, ParquetFlavor, ParquetVersion};
use arrow::util::pretty::pretty_format_batches;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line overrides for a conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub compression: Option<CompressionCodec>,
    pub parquet_compression: Option<CompressionCodec>,
    pub flavor: Option<ParquetFlavor>,
    pub parquet_version: Option<ParquetVersion>,
}

impl ConvertArgs {
    /// Resolve the job file, flags and discovered inputs into a pipeline config
    pub fn into_config(self) -> Result<ConvertConfig> {
        let job = match &self.config {
            Some(path) => JobFile::load(path)?,
            None => JobFile::default(),
        };

        let input = self
            .input
            .or(job.input)
            .ok_or_else(|| Error::config("Input directory not specified (use -i)"))?;
        let output = self
            .output
            .or(job.output)
            .ok_or_else(|| Error::config("Output file not specified (use -o)"))?;

        let mut writer = job.writer;
        if let Some(codec) = self.compression {
            writer.orc = writer.orc.with_compression(codec);
        }
        if let Some(codec) = self.parquet_compression {
            writer.parquet = writer.parquet.with_compression(codec);
        }
        if let Some(flavor) = self.flavor {
            writer.parquet = writer.parquet.with_flavor(flavor);
        }
        if let Some(version) = self.parquet_version {
            writer.parquet = writer.parquet.with_version(version);
        }

        let input_paths = discover_json_files(&input)?;
        info!(
            input = %input.display(),
            files = input_paths.len(),
            "Discovered JSON files"
        );

        Ok(ConvertConfig::new(input_paths, output)
            .with_writer(writer)
            .with_null_defaults(job.null_defaults))
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Convert {
                input,
                output,
                config,
                compression,
                parquet_compression,
                flavor,
                parquet_version,
            } => {
                let args = ConvertArgs {
                    input: input.clone(),
                    output: output.clone(),
                    config: config.clone(),
                    compression: *compression,
                    parquet_compression: *parquet_compression,
                    flavor: *flavor,
                    parquet_version: *parquet_version,
                };
                self.convert(args)
            }
            Commands::Inspect { file, rows } => self.inspect(file, *rows),
        }
    }

    /// Convert JSON files into a table file
    fn convert(&self, args: ConvertArgs) -> Result<()> {
        let config = args.into_config()?;
        let report = convert(&config)?;
        self.print_report(&report);
        Ok(())
    }

    /// Show schema, row count and a preview of a table file
    fn inspect(&self, file: &Path, preview_rows: usize) -> Result<()> {
        let table = read_table(file)
            .with_context(|| format!("Failed to inspect '{}'", file.display()))?;
        let schema = table.schema();
        let preview = table.slice(0, preview_rows.min(table.num_rows()));

        match self.cli.format {
            DisplayFormat::Json => {
                let columns = schema
                    .fields()
                    .iter()
                    .map(|field| {
                        let column_type = column_type_of(field)
                            .map_or_else(|_| field.data_type().to_string(), |t| t.to_string());
                        json!({ "name": field.name(), "type": column_type })
                    })
                    .collect::<Vec<Value>>();

                self.output_message(&json!({
                    "type": "TABLE",
                    "table": {
                        "path": file.display().to_string(),
                        "rows": table.num_rows(),
                        "columns": columns,
                        "preview": table_to_json(&preview)?,
                    }
                }));
            }
            DisplayFormat::Pretty => {
                println!("{}", file.display());
                println!("  rows: {}", table.num_rows());
                println!("  columns:");
                for field in schema.fields() {
                    println!("    {}: {}", field.name(), field.data_type());
                }
                if preview.num_rows() > 0 {
                    println!("{}", pretty_format_batches(&[preview])?);
                }
            }
        }

        Ok(())
    }

    fn print_report(&self, report: &ConversionReport) {
        match self.cli.format {
            DisplayFormat::Json => self.output_message(&json!({
                "type": "CONVERSION",
                "conversion": {
                    "files": report.files,
                    "path": report.output.path.display().to_string(),
                    "format": report.output.format,
                    "rows": report.output.rows,
                    "columns": report.output.columns,
                }
            })),
            DisplayFormat::Pretty => println!(
                "Wrote {} rows x {} columns from {} files to {} ({})",
                report.output.rows,
                report.output.columns,
                report.files,
                report.output.path.display(),
                report.output.format
            ),
        }
    }

    /// Print a single JSON message line
    fn output_message(&self, message: &Value) {
        println!("{message}");
    }
}
