//! CSV to JSON Converter
//!
//! Converts directories of CSV files into pretty-printed JSON files, one
//! output file per input file, every row an object keyed by the header.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod parser;

// Re-export commonly used types
pub use conversion::{
    convert_csv_to_json, BatchSummary, ConversionConfig, ConversionEngine, DirectoryPair,
};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult, ParseError};
pub use parser::{CsvSource, Record, RecordSet};

/// Convert CSV text to indented JSON with default configuration
pub fn convert_csv(csv: &str) -> ConversionResult<String> {
    let config = ConversionConfig::default();
    convert_csv_with_config(csv, &config)
}

/// Convert CSV text to indented JSON with custom configuration
pub fn convert_csv_with_config(csv: &str, config: &ConversionConfig) -> ConversionResult<String> {
    let result = conversion::engine::convert_csv_string(csv, config)?;
    Ok(result.content)
}

/// Run the directory driver over `config.pairs`, printing progress to stdout
pub fn run(config: &ConversionConfig) -> ConversionResult<BatchSummary> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    conversion::batch::run(config, &mut handle)
}
