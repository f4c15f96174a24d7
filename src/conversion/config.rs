//! Configuration options for CSV to JSON conversion

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Source/destination directories converted when no pairs are supplied
pub const DEFAULT_PAIRS: &[(&str, &str)] = &[
    ("csv/payments", "json/payments"),
    ("csv/scenarios", "json/scenarios"),
];

/// One source directory of CSV files and the directory receiving its JSON files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPair {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl DirectoryPair {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

impl FromStr for DirectoryPair {
    type Err = String;

    /// Parse `SRC=DEST`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((src, dest)) if !src.trim().is_empty() && !dest.trim().is_empty() => {
                Ok(Self::new(src.trim(), dest.trim()))
            }
            _ => Err(format!(
                "Invalid directory pair '{}'. Use SRC=DEST, e.g. csv/payments=json/payments",
                s
            )),
        }
    }
}

impl fmt::Display for DirectoryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.input_dir.display(),
            self.output_dir.display()
        )
    }
}

/// What to do with a listed entry whose name does not end in `.csv`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingPolicy {
    /// Log a warning and move on
    Skip,
    /// Treat it as a failed file
    Strict,
}

/// What to do when a single file fails to convert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole run on the first failure
    FailFast,
    /// Record the failure and keep converting the remaining files
    ContinueOnError,
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Directory pairs to convert, in order
    pub pairs: Vec<DirectoryPair>,
    /// Spaces per indentation level (0-8)
    pub indent_size: u8,
    /// Largest CSV file read into memory, in bytes; unlimited when `None`
    pub memory_limit: Option<usize>,
    /// Handling of non-`.csv` entries
    pub naming: NamingPolicy,
    /// Handling of per-file failures
    pub failure: FailurePolicy,
    /// Walk source directories recursively
    pub recursive: bool,
    /// Create missing destination directories
    pub create_dirs: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            pairs: DEFAULT_PAIRS
                .iter()
                .map(|(src, dest)| DirectoryPair::new(*src, *dest))
                .collect(),
            indent_size: 4,
            memory_limit: None,
            naming: NamingPolicy::Skip,
            failure: FailurePolicy::FailFast,
            recursive: false,
            create_dirs: false,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the directory pairs
    pub fn with_pairs(mut self, pairs: Vec<DirectoryPair>) -> Self {
        self.pairs = pairs;
        self
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Result<Self, String> {
        if size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }
        self.indent_size = size;
        Ok(self)
    }

    /// Refuse CSV files larger than `limit_bytes`
    pub fn with_memory_limit(mut self, limit_bytes: usize) -> Self {
        self.memory_limit = Some(limit_bytes);
        self
    }

    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_failure_policy(mut self, failure: FailurePolicy) -> Self {
        self.failure = failure;
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Indentation unit handed to the JSON formatter
    pub fn indent(&self) -> Vec<u8> {
        vec![b' '; self.indent_size as usize]
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.pairs.is_empty() {
            return Err("At least one directory pair is required".to_string());
        }

        if self.indent_size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }

        if self.memory_limit.is_some_and(|limit| limit < 1024) {
            return Err("Memory limit must be at least 1KB".to_string());
        }

        Ok(())
    }
}
