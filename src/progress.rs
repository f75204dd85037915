//! Progress reporting and the final summary
//!
//! Provides a spinner while discovery and counting run, plus the styled
//! header and summary blocks printed around a run.

use crate::counter::coordinator::CountResult;
use console::style;
use humansize::{format_size, BINARY};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a run is in flight
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();

        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Invalid progress template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Set a status message
    pub fn set_status(&self, status: &str) {
        self.bar.set_message(status.to_string());
    }

    /// Finish and clear the progress display
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .rev()
                .map(|&b| b as char)
                .collect::<String>()
        })
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}

/// Print a header at the start of a run
pub fn print_header(paths: &[String], workers: usize, top_n: usize) {
    println!();
    println!(
        "{} {}",
        style("topwords").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Paths:").bold(), paths.join(", "));
    println!("  {} {}", style("Workers:").bold(), workers);
    println!("  {} {}", style("Top-N:").bold(), top_n);
    println!();
}

/// Print a summary of the completed run
pub fn print_summary(result: &CountResult) {
    let duration_secs = result.duration.as_secs_f64();

    println!();
    println!("{}", style("Count Complete").green().bold());
    println!("{}", style("─".repeat(50)).dim());
    println!(
        "  {} {}",
        style("Files Processed:").bold(),
        format_number(result.files_processed)
    );
    println!(
        "  {} {}",
        style("Bytes Read:").bold(),
        format_size(result.bytes_read, BINARY)
    );
    println!(
        "  {} {}",
        style("Unique Words:").bold(),
        format_number(result.frequency.unique_words() as u64)
    );
    println!(
        "  {} {}",
        style("Total Words:").bold(),
        format_number(result.frequency.total_words())
    );
    println!(
        "  {} {:.2}s",
        style("Duration:").bold(),
        duration_secs
    );
    if result.read_errors > 0 {
        println!(
            "  {} {}",
            style("Read Errors:").yellow().bold(),
            format_number(result.read_errors)
        );
    }
    if result.incomplete_partitions > 0 {
        println!(
            "  {} {}",
            style("Incomplete Partitions:").yellow().bold(),
            format_number(result.incomplete_partitions)
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(1234567890), "1,234,567,890");
    }
}
