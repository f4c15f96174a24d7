//! Command-line interface module

use clap::Parser;
use console::style;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::conversion::stats::BatchSummary;
use crate::conversion::{
    ConversionConfig, ConversionResult, DirectoryPair, FailurePolicy, NamingPolicy,
};
use crate::error::{ConversionError, ConversionErrorKind};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "csv2json")]
#[command(about = "Convert directories of CSV files to pretty-printed JSON")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Source and destination directories as SRC=DEST (repeatable;
    /// default: csv/payments=json/payments and csv/scenarios=json/scenarios)
    #[arg(long = "pair", value_name = "SRC=DEST")]
    pub pairs: Vec<DirectoryPair>,

    /// Recursively process source directories
    #[arg(long)]
    pub recursive: bool,

    /// Create missing destination directories
    #[arg(long)]
    pub create_dirs: bool,

    /// Fail on entries that do not end in .csv instead of skipping them
    #[arg(long)]
    pub strict_names: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Spaces per indentation level (0-8, default: 4)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Refuse CSV files larger than this (e.g., 100MB; default: no limit)
    #[arg(long)]
    pub memory_limit: Option<String>,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Output conversion statistics as JSON
    #[arg(long)]
    pub stats_json: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let mut config = ConversionConfig::default()
            .with_recursive(args.recursive)
            .with_create_dirs(args.create_dirs);

        if let Some(limit) = parse_memory_limit(&args.memory_limit)? {
            config = config.with_memory_limit(limit);
        }
        if !args.pairs.is_empty() {
            config = config.with_pairs(args.pairs.clone());
        }
        if let Some(indent) = args.indent {
            config = config
                .with_indent_size(indent)
                .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;
        }
        if args.strict_names {
            config = config.with_naming(NamingPolicy::Strict);
        }
        if args.continue_on_error {
            config = config.with_failure_policy(FailurePolicy::ContinueOnError);
        }

        // Validate configuration
        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats || self.args.stats_json
    }

    /// Describe the directory pairs being converted
    pub fn pairs_description(&self) -> String {
        self.conversion_config
            .pairs
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parse memory limit string (e.g., "100MB", "1GB", "500KB"); `None` means unlimited
pub fn parse_memory_limit(limit: &Option<String>) -> ConversionResult<Option<usize>> {
    let Some(limit_str) = limit else {
        return Ok(None);
    };

    let limit_str = limit_str.trim().to_uppercase();
    let invalid = || {
        ConversionError::conversion(ConversionErrorKind::configuration(format!(
            "Invalid memory limit: {}",
            limit_str
        )))
    };

    let (number, multiplier) = if let Some(size) = limit_str.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        return size.trim().parse::<usize>().map(Some).map_err(|_| invalid());
    } else {
        // Assume bytes
        return limit_str.parse::<usize>().map(Some).map_err(|_| invalid());
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(Some((value * multiplier) as usize))
}

/// Install the tracing subscriber. `RUST_LOG` takes precedence over the flags.
pub fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "csv2json=debug"
    } else if quiet {
        "csv2json=error"
    } else {
        "csv2json=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", style("✗").red().for_stderr(), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", style("⚠").yellow().for_stderr(), message);
        }
    }
}

/// Render the run statistics as text
pub fn format_statistics(summary: &BatchSummary) -> String {
    let mut lines = vec![
        "Conversion Statistics:".to_string(),
        format!("Files converted: {}", summary.files_converted),
        format!("Files skipped: {}", summary.files_skipped),
        format!("Files failed: {}", summary.files_failed()),
        format!("Rows written: {}", summary.rows_written),
        format!("Input size: {}", CliUtils::format_file_size(summary.input_bytes)),
        format!("Output size: {}", CliUtils::format_file_size(summary.output_bytes)),
        format!(
            "Processing time: {}",
            CliUtils::format_duration(Duration::from_millis(summary.processing_time_ms))
        ),
    ];
    if summary.processing_time_ms > 0 {
        lines.push(format!(
            "Throughput: {}/s",
            CliUtils::format_file_size(summary.throughput_bytes_per_sec() as u64)
        ));
    }
    lines.join("\n")
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &anyhow::Error) {
    let Some(conversion_error) = error.downcast_ref::<ConversionError>() else {
        CliUtils::show_error(&format!("{:#}", error));
        return;
    };

    CliUtils::show_error(&conversion_error.user_message());

    // Provide helpful suggestions
    match conversion_error.kind() {
        Some(ConversionErrorKind::Naming { .. }) => {
            eprintln!("\nTip: Drop --strict-names to skip files that do not end in .csv");
        }
        Some(ConversionErrorKind::CsvTooLarge { .. }) => {
            eprintln!("\nTip: Use --memory-limit to increase the allowed file size");
        }
        Some(ConversionErrorKind::Io { .. }) => {
            eprintln!("\nTip: Source and destination directories must exist (see --create-dirs)");
        }
        _ => {}
    }

    // Show usage hint
    eprintln!("\nTry 'csv2json --help' for usage information.");
}
