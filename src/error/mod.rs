//! Error types and handling infrastructure for CSV to JSON conversion

use std::fmt;
use std::path::{Path, PathBuf};

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("JSON serialization error: {message}")]
    Serialization { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("CSV too large: {size} bytes (limit: {limit} bytes)")]
    CsvTooLarge { size: u64, limit: u64 },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Cannot derive output name for '{name}': expected a .{expected} extension")]
    Naming { name: String, expected: String },
}

impl ConversionErrorKind {
    pub fn serialization(message: String) -> Self {
        Self::Serialization { message }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn naming(name: String, expected: &str) -> Self {
        Self::Naming {
            name,
            expected: expected.to_string(),
        }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Conversion { kind: ConversionErrorKind },
}

impl From<ConversionErrorKind> for ConversionError {
    fn from(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind }
    }
}

impl ConversionError {
    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind }
    }

    /// IO failure tied to a concrete path
    pub fn io_at(path: &Path, error: &std::io::Error) -> Self {
        Self::conversion(ConversionErrorKind::io(
            format!("{}: {}", path.display(), error),
            Some(path.to_path_buf()),
        ))
    }

    /// Borrow the error kind, if this is not a parse error
    pub fn kind(&self) -> Option<&ConversionErrorKind> {
        match self {
            Self::Conversion { kind } => Some(kind),
            Self::ParseError(_) => None,
        }
    }

    pub fn is_naming(&self) -> bool {
        matches!(self.kind(), Some(ConversionErrorKind::Naming { .. }))
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                let file = err
                    .path
                    .as_ref()
                    .map(|p| format!(" in {}", p.display()))
                    .unwrap_or_default();
                match err.line {
                    Some(line) => format!("CSV parse error{} at line {}: {}", file, line, err.message),
                    None => format!("CSV parse error{}: {}", file, err.message),
                }
            }
            Self::Conversion { kind } => match kind {
                ConversionErrorKind::CsvTooLarge { size, limit } => {
                    format!("CSV file too large: {} bytes (limit: {} bytes)", size, limit)
                }
                ConversionErrorKind::Naming { name, expected } => {
                    format!("'{}' does not end in .{}; no output name can be derived", name, expected)
                }
                _ => self.to_string(),
            },
        }
    }
}

/// CSV parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<u64>,
    pub path: Option<PathBuf>,
}

impl ParseError {
    pub fn new(message: String, line: Option<u64>) -> Self {
        Self {
            message,
            line,
            path: None,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
