//! CSV reading module
//!
//! Turns a CSV source into a [`RecordSet`]: the header row plus one
//! header-keyed [`Record`] per data row, every value kept as a string.

pub mod directory;
pub mod filter;

use crate::error::{ConversionError, ConversionResult, ParseError};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;

/// One data row keyed by column name, in header order
pub type Record = Map<String, Value>;

/// All rows of one CSV file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Source for parsing operations
#[derive(Debug, Clone)]
pub enum CsvSource {
    String(String),
    File(PathBuf),
}

impl CsvSource {
    /// Parse CSV from this source
    pub fn parse(&self) -> ConversionResult<RecordSet> {
        match self {
            CsvSource::String(content) => read_records(content.as_bytes(), None),
            CsvSource::File(path) => {
                let file = File::open(path).map_err(|e| ConversionError::io_at(path, &e))?;
                read_records(file, Some(path))
            }
        }
    }

    /// Get the size of the source in bytes (if known)
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            CsvSource::String(s) => Some(s.len() as u64),
            CsvSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
        }
    }
}

/// Read every row of a CSV stream into a [`RecordSet`].
///
/// Short rows are padded with empty strings; fields past the last header
/// column are dropped with a warning. A repeated header name keeps its first
/// position and takes the value of its last column.
pub fn read_records<R: Read>(reader: R, origin: Option<&Path>) -> ConversionResult<RecordSet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| csv_error(e, origin))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|e| csv_error(e, origin))?;

        if row.len() > headers.len() {
            warn!(
                file = %origin.map(|p| p.display().to_string()).unwrap_or_default(),
                line = row.position().map(|p| p.line()).unwrap_or_default(),
                extra = row.len() - headers.len(),
                "dropping fields beyond the header"
            );
        }

        let mut record = Record::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            let value = row.get(index).unwrap_or_default();
            record.insert(header.clone(), Value::String(value.to_string()));
        }
        records.push(record);
    }

    Ok(RecordSet { headers, records })
}

/// IO failures stay IO errors; everything else is a parse error
fn csv_error(error: csv::Error, origin: Option<&Path>) -> ConversionError {
    let line = error.position().map(|p| p.line());

    if error.is_io_error() {
        let message = match origin {
            Some(path) => format!("{}: {}", path.display(), error),
            None => error.to_string(),
        };
        return ConversionError::conversion(crate::error::ConversionErrorKind::io(
            message,
            origin.map(Path::to_path_buf),
        ));
    }

    let mut parse_error = ParseError::new(format!("Invalid CSV: {}", error), line);
    if let Some(path) = origin {
        parse_error = parse_error.with_path(path.to_path_buf());
    }
    ConversionError::ParseError(parse_error)
}
