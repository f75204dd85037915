//! Configuration types for topwords
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation
//! - The JSON debug dump of the resolved configuration

use crate::error::ConfigError;
use clap::Parser;
use regex::Regex;
use serde::Serialize;

/// Default cap on the worker pool
pub const DEFAULT_WORKER_CAP: usize = 10;

/// Maximum reasonable worker count
pub const MAX_WORKERS: usize = 512;

/// Concurrent word counter with top-N reporting
#[derive(Parser, Debug, Clone)]
#[command(
    name = "topwords",
    version,
    about = "Counts words across files and directories and prints the top-N most frequent",
    long_about = "Counts word occurrences in all files and directories (recursively) provided.\n\n\
                  Words are lowercased and split on whitespace. The top-N words and their\n\
                  counts are printed, ties broken alphabetically. Non-existent and unreadable\n\
                  files and directories are skipped with a warning. Symbolic links are not\n\
                  followed.",
    after_help = "EXAMPLES:\n    \
        topwords 10 ./docs\n    \
        topwords 25 notes.txt ./src ./archive -w 4\n    \
        topwords 10 ./logs --exclude '\\.gz$' --exclude 'tmp/'"
)]
pub struct CliArgs {
    /// Number of top words to print
    #[arg(value_name = "TOP_N")]
    pub top_n: usize,

    /// Files and/or directories to count (directories are walked recursively)
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<String>,

    /// Number of worker threads
    #[arg(short = 'w', long, default_value_t = default_workers(), value_name = "NUM")]
    pub workers: usize,

    /// Exclude paths matching pattern (can be repeated)
    #[arg(long = "exclude", value_name = "PATTERN", action = clap::ArgAction::Append)]
    pub exclude_patterns: Vec<String>,

    /// Quiet mode - suppress header and progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose output (show per-file and per-worker detail)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn default_workers() -> usize {
    // Counting is I/O bound; more threads than cores helps little and
    // the pool stays small either way.
    num_cpus::get().clamp(1, DEFAULT_WORKER_CAP)
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct CountConfig {
    /// Number of top words to print
    pub top_n: usize,

    /// Raw path arguments, resolved later by discovery
    pub raw_paths: Vec<String>,

    /// Upper bound on concurrent workers
    pub worker_count: usize,

    /// Compiled exclude patterns
    pub exclude_patterns: Vec<Regex>,

    /// Show header, progress and summary
    pub show_progress: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl CountConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        if args.top_n < 1 {
            return Err(ConfigError::InvalidTopN { value: args.top_n });
        }

        if args.workers == 0 || args.workers > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkerCount {
                count: args.workers,
                max: MAX_WORKERS,
            });
        }

        let exclude_patterns = args
            .exclude_patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| ConfigError::InvalidExcludePattern {
                    pattern: p.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            top_n: args.top_n,
            raw_paths: args.paths,
            worker_count: args.workers,
            exclude_patterns,
            show_progress: !args.quiet,
            verbose: args.verbose,
        })
    }

    /// Render the resolved configuration as JSON for the startup debug log
    pub fn debug_dump(&self) -> String {
        let dump = ConfigDump {
            top_n: self.top_n,
            paths: &self.raw_paths,
            workers: self.worker_count,
            exclude_patterns: self
                .exclude_patterns
                .iter()
                .map(|re| re.as_str().to_owned())
                .collect(),
        };

        serde_json::to_string(&dump).unwrap_or_else(|_| "<unserializable>".into())
    }
}

/// Serializable view of the configuration for logging
#[derive(Serialize)]
struct ConfigDump<'a> {
    top_n: usize,
    paths: &'a [String],
    workers: usize,
    exclude_patterns: Vec<String>,
}
