//! Directory driver: converts every CSV file of each configured directory pair

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::cli::path_mapping::map_input_to_output;
use crate::conversion::config::{DirectoryPair, FailurePolicy, NamingPolicy};
use crate::conversion::engine::ConversionEngine;
use crate::conversion::stats::BatchSummary;
use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::directory;

/// Convert every configured directory pair, writing progress lines to `progress`.
///
/// With [`FailurePolicy::FailFast`] the first failing file aborts the run and
/// outputs already written stay on disk. With
/// [`FailurePolicy::ContinueOnError`] failures are collected in the summary.
pub fn run<W: Write>(config: &ConversionConfig, progress: &mut W) -> ConversionResult<BatchSummary> {
    let start_time = Instant::now();
    let engine = ConversionEngine::new(config.clone());
    let mut summary = BatchSummary::new();

    for pair in &config.pairs {
        info!(pair = %pair, "converting directory");
        let pair_summary = convert_pair(&engine, pair, progress)?;
        summary.combine(&pair_summary);
    }

    summary.processing_time_ms = start_time.elapsed().as_millis() as u64;
    Ok(summary)
}

/// Convert the files of a single directory pair
pub fn convert_pair<W: Write>(
    engine: &ConversionEngine,
    pair: &DirectoryPair,
    progress: &mut W,
) -> ConversionResult<BatchSummary> {
    let config = engine.config();
    let start_time = Instant::now();
    let mut summary = BatchSummary::new();

    if config.create_dirs {
        fs::create_dir_all(&pair.output_dir)
            .map_err(|e| ConversionError::io_at(&pair.output_dir, &e))?;
    }

    let entries = list_inputs(&pair.input_dir, config.recursive)?;
    debug!(dir = %pair.input_dir.display(), count = entries.len(), "listed source directory");

    for input in entries {
        let display_name = input
            .strip_prefix(&pair.input_dir)
            .unwrap_or(&input)
            .display()
            .to_string();

        let output = match map_input_to_output(&pair.input_dir, &input, &pair.output_dir) {
            Ok(output) => output,
            Err(e) if config.naming == NamingPolicy::Skip => {
                warn!(entry = %input.display(), "skipping: {}", e.user_message());
                summary.record_skip();
                continue;
            }
            Err(e) => {
                handle_failure(config.failure, &input, e, &mut summary)?;
                continue;
            }
        };

        if config.recursive || config.create_dirs {
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent).map_err(|e| ConversionError::io_at(parent, &e))?;
            }
        }

        emit(progress, &format!("Converting {}", display_name))?;
        match engine.convert_file(&input, &output) {
            Ok(metadata) => {
                summary.record_success(&metadata);
                emit(progress, "Done!!")?;
            }
            Err(e) => handle_failure(config.failure, &input, e, &mut summary)?,
        }
    }

    summary.processing_time_ms = start_time.elapsed().as_millis() as u64;
    Ok(summary)
}

fn list_inputs(dir: &Path, recursive: bool) -> ConversionResult<Vec<PathBuf>> {
    let listed = if recursive {
        directory::list_files_recursive(dir)
    } else {
        directory::list_entries(dir)
    };
    listed.map_err(|e| ConversionError::io_at(dir, &e))
}

fn handle_failure(
    policy: FailurePolicy,
    input: &Path,
    error: ConversionError,
    summary: &mut BatchSummary,
) -> ConversionResult<()> {
    match policy {
        FailurePolicy::FailFast => Err(error),
        FailurePolicy::ContinueOnError => {
            warn!(entry = %input.display(), "conversion failed: {}", error.user_message());
            summary.record_failure(input, &error);
            Ok(())
        }
    }
}

fn emit<W: Write>(progress: &mut W, line: &str) -> ConversionResult<()> {
    writeln!(progress, "{}", line).map_err(|e| {
        ConversionError::conversion(ConversionErrorKind::io(
            format!("Failed to write progress: {}", e),
            None,
        ))
    })
}
