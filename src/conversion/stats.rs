//! Statistics for a batch conversion run

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::conversion::engine::ConversionMetadata;
use crate::error::ConversionError;

/// A file that could not be converted
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FileFailure {
    pub input: PathBuf,
    pub message: String,
}

/// Aggregated results of a directory run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    /// Files written successfully
    pub files_converted: usize,
    /// Entries skipped because their name does not end in `.csv`
    pub files_skipped: usize,
    /// Data rows written across all files
    pub rows_written: u64,
    /// CSV bytes read
    pub input_bytes: u64,
    /// JSON bytes written
    pub output_bytes: u64,
    /// Wall time for the whole run
    pub processing_time_ms: u64,
    /// Files that failed when running with continue-on-error
    pub failures: Vec<FileFailure>,
}

impl BatchSummary {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, metadata: &ConversionMetadata) {
        self.files_converted += 1;
        self.rows_written += metadata.row_count as u64;
        self.input_bytes += metadata.input_size;
        self.output_bytes += metadata.output_size;
    }

    pub fn record_skip(&mut self) {
        self.files_skipped += 1;
    }

    pub fn record_failure(&mut self, input: &Path, error: &ConversionError) {
        self.failures.push(FileFailure {
            input: input.to_path_buf(),
            message: error.user_message(),
        });
    }

    pub fn files_failed(&self) -> usize {
        self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Combine statistics from another run
    pub fn combine(&mut self, other: &Self) {
        self.files_converted += other.files_converted;
        self.files_skipped += other.files_skipped;
        self.rows_written += other.rows_written;
        self.input_bytes += other.input_bytes;
        self.output_bytes += other.output_bytes;
        self.processing_time_ms += other.processing_time_ms;
        self.failures.extend(other.failures.iter().cloned());
    }

    /// Throughput (CSV bytes processed per second)
    pub fn throughput_bytes_per_sec(&self) -> f64 {
        if self.processing_time_ms > 0 {
            self.input_bytes as f64 / (self.processing_time_ms as f64 / 1000.0)
        } else {
            0.0
        }
    }
}
