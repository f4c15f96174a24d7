//! CSV to JSON conversion module
//!
//! This module contains the core conversion logic, the directory driver,
//! configuration, and statistics.

pub mod batch;
pub mod config;
pub mod engine;
pub mod limits;
pub mod stats;

pub use config::{ConversionConfig, DirectoryPair, FailurePolicy, NamingPolicy};

pub use engine::{convert_csv_to_json, ConversionEngine, ConversionMetadata, JsonData};

pub use stats::BatchSummary;

/// Result type for conversion operations
pub use crate::error::ConversionResult;
