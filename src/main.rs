//! topwords - Concurrent Word Counter
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use topwords::config::{CliArgs, CountConfig};
use topwords::error::ConfigError;
use topwords::counter::CountCoordinator;
use topwords::paths::PathSet;
use topwords::progress::{print_header, print_summary, ProgressReporter};
use topwords::ranking::top_n;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Setup logging
    setup_logging(args.verbose)?;

    // Validate and create config
    let config = CountConfig::from_args(args).context("Invalid configuration")?;

    debug!(config = %config.debug_dump(), "Resolved configuration");

    // Print header
    if config.show_progress {
        print_header(&config.raw_paths, config.worker_count, config.top_n);
    }

    let progress = config.show_progress.then(ProgressReporter::new);

    // Resolve arguments into the list of readable files
    if let Some(ref p) = progress {
        p.set_status("Discovering files...");
    }

    let path_set = PathSet::discover(&config.raw_paths, &config.exclude_patterns);

    if path_set.is_empty() {
        if let Some(ref p) = progress {
            p.finish_and_clear();
        }
        return Err(ConfigError::NoReadableFiles.into());
    }

    info!(
        files = path_set.len(),
        skipped = path_set.skipped(),
        excluded = path_set.excluded(),
        "Path discovery complete"
    );

    // Run the counting phase
    if let Some(ref p) = progress {
        p.set_status(&format!("Counting words in {} files...", path_set.len()));
    }

    let coordinator = CountCoordinator::new(config.worker_count);
    let result = coordinator.run(path_set.into_files());

    if let Some(ref p) = progress {
        p.finish_and_clear();
    }

    // Rank and print the top-N words
    let ranked = top_n(&result.frequency, config.top_n);
    for entry in &ranked {
        println!("{} occurred {} times", entry.word, entry.count);
    }

    // Print summary
    if config.show_progress {
        print_summary(&result);
    }

    if result.read_errors > 0 {
        info!(errors = result.read_errors, "Completed with read errors");
    }

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("topwords=debug,warn")
    } else {
        EnvFilter::new("topwords=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}
