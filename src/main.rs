use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::debug;

use csv2json::cli::{self, Args, CliConfig, CliUtils};
use csv2json::conversion::engine::to_pretty_json;
use csv2json::BatchSummary;

fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logging
    cli::init_logging(args.verbose, args.quiet);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;
    debug!(pairs = %config.pairs_description(), "starting conversion");

    let summary = if config.is_quiet() {
        csv2json::conversion::batch::run(&config.conversion_config, &mut std::io::sink())?
    } else {
        csv2json::run(&config.conversion_config)?
    };

    if config.want_stats() {
        output_statistics(&config, &summary)?;
    }

    if summary.has_failures() {
        for failure in &summary.failures {
            CliUtils::show_error(&format!("{}: {}", failure.input.display(), failure.message));
        }
        bail!(
            "{} of {} file(s) failed to convert",
            summary.files_failed(),
            summary.files_failed() + summary.files_converted
        );
    }

    if summary.files_skipped > 0 {
        CliUtils::show_warning(
            &format!("Skipped {} entries without a .csv extension", summary.files_skipped),
            config.is_quiet(),
        );
    }

    Ok(())
}

fn output_statistics(config: &CliConfig, summary: &BatchSummary) -> Result<()> {
    if config.args.stats_json {
        println!("{}", to_pretty_json(summary, b"  ")?);
    } else if !config.is_quiet() {
        println!("\n{}", cli::format_statistics(summary));
    }
    Ok(())
}
