//! Core conversion engine for CSV to JSON transformation

use crate::conversion::config::ConversionConfig;
use crate::conversion::limits;
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::{CsvSource, RecordSet};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Core conversion result
#[derive(Debug, Clone)]
pub struct JsonData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl JsonData {
    /// Create a new JSON data result
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the formatted JSON output
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the output is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionMetadata {
    pub input_size: u64,
    pub output_size: u64,
    pub row_count: usize,
    pub column_count: usize,
    pub processing_time_ms: u64,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Serialize parsed records as an indented JSON array
    pub fn convert(&self, records: &RecordSet) -> ConversionResult<JsonData> {
        let start_time = Instant::now();
        let content = to_pretty_json(&records.records, &self.config.indent())?;

        let metadata = ConversionMetadata {
            input_size: 0,
            output_size: content.len() as u64,
            row_count: records.len(),
            column_count: records.column_count(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        Ok(JsonData::new(content, metadata))
    }

    /// Convert CSV from a source to JSON
    pub fn convert_from_source(&self, source: &CsvSource) -> ConversionResult<JsonData> {
        let start_time = Instant::now();

        // Check source size before reading to avoid loading very large files
        limits::check_source_size_before_read(source, &self.config)?;

        let records = source.parse()?;
        let mut data = self.convert(&records)?;
        data.metadata.input_size = source.estimated_size().unwrap_or_default();
        data.metadata.processing_time_ms = start_time.elapsed().as_millis() as u64;

        Ok(data)
    }

    /// Convert CSV string to JSON
    pub fn convert_string(&self, csv_str: &str) -> ConversionResult<JsonData> {
        let source = CsvSource::String(csv_str.to_string());
        self.convert_from_source(&source)
    }

    /// Convert one CSV file into one JSON file.
    ///
    /// The input is read and closed before the output is opened; the output
    /// is truncated and fully rewritten.
    pub fn convert_file(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> ConversionResult<ConversionMetadata> {
        let source = CsvSource::File(input_path.to_path_buf());
        let data = self.convert_from_source(&source)?;

        fs::write(output_path, data.as_str())
            .map_err(|e| ConversionError::io_at(output_path, &e))?;

        debug!(
            input = %input_path.display(),
            output = %output_path.display(),
            rows = data.metadata.row_count,
            bytes = data.metadata.output_size,
            "wrote json file"
        );

        Ok(data.metadata)
    }
}

/// Render any serializable value as JSON indented by `indent` per level.
///
/// Key/value pairs are separated by `": "`; the text has no trailing newline
/// and empty arrays render as `[]`.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: &[u8]) -> ConversionResult<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);

    value.serialize(&mut serializer).map_err(|e| {
        ConversionError::conversion(ConversionErrorKind::serialization(e.to_string()))
    })?;

    String::from_utf8(buffer).map_err(|e| {
        ConversionError::conversion(ConversionErrorKind::serialization(e.to_string()))
    })
}

/// High-level conversion functions
/// Convert a CSV file to a JSON file with the given configuration
pub fn convert_csv_to_json(
    input_path: &Path,
    output_path: &Path,
    config: &ConversionConfig,
) -> ConversionResult<ConversionMetadata> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_file(input_path, output_path)
}

/// Convert CSV string to JSON text
pub fn convert_csv_string(csv_str: &str, config: &ConversionConfig) -> ConversionResult<JsonData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_string(csv_str)
}
