//! Parquet output
//!
//! Column names are rewritten according to the configured flavor before the
//! table reaches parquet-rs.

use super::sink::OutputSink;
use crate::error::{Error, Result};
use crate::types::{CompressionCodec, ParquetFlavor, ParquetVersion};
use arrow::datatypes::{Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// Characters Spark rejects in column names
static SPARK_INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ,;{}()\n\t=]").expect("valid regex"));

/// Rows per row group unless configured otherwise
pub const DEFAULT_ROW_GROUP_ROWS: usize = 1 << 20;

/// Parquet output settings
///
/// Defaults: snappy compression, Spark-compatible column names, format 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParquetWriterConfig {
    compression: CompressionCodec,
    flavor: ParquetFlavor,
    version: ParquetVersion,
    /// Upper bound on rows per row group
    pub row_group_rows: usize,
    /// Dictionary-encode columns
    pub dictionary: bool,
    /// Write page and column chunk statistics
    pub statistics: bool,
}

impl Default for ParquetWriterConfig {
    fn default() -> Self {
        Self {
            compression: CompressionCodec::Snappy,
            flavor: ParquetFlavor::Spark,
            version: ParquetVersion::V1,
            row_group_rows: DEFAULT_ROW_GROUP_ROWS,
            dictionary: true,
            statistics: true,
        }
    }
}

impl ParquetWriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compression(&self) -> CompressionCodec {
        self.compression
    }

    pub fn flavor(&self) -> ParquetFlavor {
        self.flavor
    }

    pub fn version(&self) -> ParquetVersion {
        self.version
    }

    #[must_use]
    pub fn with_compression(self, compression: CompressionCodec) -> Self {
        Self { compression, ..self }
    }

    #[must_use]
    pub fn with_flavor(self, flavor: ParquetFlavor) -> Self {
        Self { flavor, ..self }
    }

    #[must_use]
    pub fn with_version(self, version: ParquetVersion) -> Self {
        Self { version, ..self }
    }

    /// Translate into parquet-rs writer properties
    pub fn writer_properties(&self) -> WriterProperties {
        let statistics = if self.statistics {
            EnabledStatistics::Page
        } else {
            EnabledStatistics::None
        };

        WriterProperties::builder()
            .set_compression(self.compression.into())
            .set_writer_version(self.version.into())
            .set_max_row_group_size(self.row_group_rows.max(1))
            .set_dictionary_enabled(self.dictionary)
            .set_statistics_enabled(statistics)
            .build()
    }
}

/// Column name as written under the Spark flavor
pub fn spark_column_name(name: &str) -> String {
    SPARK_INVALID_CHARS.replace_all(name, "_").into_owned()
}

/// Apply the flavor's column naming rules to `schema`
fn flavored_schema(schema: &Schema, flavor: ParquetFlavor, path: &Path) -> Result<SchemaRef> {
    match flavor {
        ParquetFlavor::None => Ok(Arc::new(schema.clone())),
        ParquetFlavor::Spark => {
            let mut seen = HashSet::new();
            let mut fields = Vec::with_capacity(schema.fields().len());

            for field in schema.fields() {
                let name = spark_column_name(field.name());
                if !seen.insert(name.clone()) {
                    return Err(Error::write(
                        path,
                        format!("column '{}' collides with another column as '{name}'", field.name()),
                    ));
                }
                fields.push(Field::new(name, field.data_type().clone(), field.is_nullable()));
            }

            Ok(Arc::new(Schema::new(fields)))
        }
    }
}

/// Write a table to a Parquet file
///
/// The file appears at `path` only once it is complete. Returns the number of
/// rows written.
pub fn write_parquet(
    path: impl AsRef<Path>,
    batch: &RecordBatch,
    config: &ParquetWriterConfig,
) -> Result<usize> {
    let path = path.as_ref();
    let schema = flavored_schema(batch.schema().as_ref(), config.flavor, path)?;
    let batch = RecordBatch::try_new(Arc::clone(&schema), batch.columns().to_vec())?;

    let mut sink = OutputSink::open(path)?;
    let props = config.writer_properties();

    let mut writer = ArrowWriter::try_new(sink.file_mut(), schema, Some(props))
        .map_err(|e| Error::write(path, format!("failed to create Parquet writer: {e}")))?;

    writer
        .write(&batch)
        .map_err(|e| Error::write(path, format!("failed to write batch: {e}")))?;

    writer
        .close()
        .map_err(|e| Error::write(path, format!("failed to close Parquet writer: {e}")))?;

    sink.commit()?;

    debug!(
        path = %path.display(),
        rows = batch.num_rows(),
        compression = %config.compression,
        "Wrote Parquet file"
    );

    Ok(batch.num_rows())
}
