//! Count coordinator - orchestrates the parallel counting phase
//!
//! The coordinator is responsible for:
//! - Constructing the shared counter for the run
//! - Partitioning the path list round-robin across workers
//! - Spawning one worker thread per non-empty partition
//! - The join barrier: blocking until every worker has terminated
//! - Aggregating per-worker statistics into the run result
//!
//! Worker failures are contained: a worker that cannot be spawned or
//! that panics mid-partition is logged and counted as an incomplete
//! partition, and the run still completes with whatever was counted.

use crate::counter::partition::partition;
use crate::counter::store::{WordCounter, WordFrequency};
use crate::counter::worker::{aggregate_stats, Worker, WorkerStats};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result of a completed counting run
#[derive(Debug)]
pub struct CountResult {
    /// Final word -> count snapshot
    pub frequency: WordFrequency,

    /// Files fully processed
    pub files_processed: u64,

    /// Tokens fed into the counter
    pub tokens_counted: u64,

    /// Bytes of text read
    pub bytes_read: u64,

    /// Files skipped due to read failures
    pub read_errors: u64,

    /// Partitions whose worker did not finish cleanly
    pub incomplete_partitions: u64,

    /// Time taken for the counting phase
    pub duration: Duration,
}

/// Coordinates the parallel counting phase
pub struct CountCoordinator {
    /// Upper bound on concurrent workers
    worker_count: usize,
}

impl CountCoordinator {
    /// Create a coordinator that runs at most `worker_count` workers
    ///
    /// A zero bound is treated as one worker.
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count: worker_count.max(1),
        }
    }

    /// Count words across `paths` and block until all workers have joined
    ///
    /// An empty path list spawns no workers and yields an empty frequency.
    pub fn run(&self, paths: Vec<PathBuf>) -> CountResult {
        let start = Instant::now();
        let counter = Arc::new(WordCounter::new());

        let partitions = partition(paths, self.worker_count);
        info!(
            partitions = partitions.len(),
            workers = self.worker_count,
            "Starting word count"
        );

        let mut incomplete = 0u64;
        let mut workers = Vec::with_capacity(partitions.len());
        for (id, part) in partitions.into_iter().enumerate() {
            match Worker::spawn(id, part, Arc::clone(&counter)) {
                Ok(worker) => workers.push(worker),
                Err(e) => {
                    warn!(error = %e, "Worker not started; its partition will not be counted");
                    incomplete += 1;
                }
            }
        }

        // Join barrier: every spawned worker terminates before we read
        // the final counts.
        let stats: Vec<Arc<WorkerStats>> = workers.iter().map(Worker::stats_handle).collect();
        for worker in workers {
            if let Err(e) = worker.join() {
                warn!(error = %e, "Worker failed to join cleanly");
                incomplete += 1;
            }
        }

        let (files, tokens, bytes, errors) = aggregate_stats(&stats);
        let frequency = match Arc::try_unwrap(counter) {
            Ok(counter) => counter.into_frequency(),
            // A dead worker may still hold an Arc clone; all live workers
            // have joined, so the snapshot is the final state.
            Err(shared) => shared.snapshot(),
        };

        let duration = start.elapsed();
        debug!(
            unique = frequency.unique_words(),
            total = frequency.total_words(),
            files = files,
            errors = errors,
            duration_ms = duration.as_millis() as u64,
            "Count completed"
        );

        CountResult {
            frequency,
            files_processed: files,
            tokens_counted: tokens,
            bytes_read: bytes,
            read_errors: errors,
            incomplete_partitions: incomplete,
            duration,
        }
    }
}

/// Count words across `paths` using up to `worker_count` parallel workers
///
/// Convenience entry point when only the final frequency is needed.
pub fn count_words(paths: Vec<PathBuf>, worker_count: usize) -> WordFrequency {
    CountCoordinator::new(worker_count).run(paths).frequency
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &std::path::Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        File::create(&path)
            .unwrap()
            .write_all(contents.as_bytes())
            .unwrap();
        path
    }

    #[test]
    fn test_empty_path_list_yields_empty_frequency() {
        let result = CountCoordinator::new(4).run(Vec::new());

        assert!(result.frequency.is_empty());
        assert_eq!(result.files_processed, 0);
        assert_eq!(result.read_errors, 0);
    }

    #[test]
    fn test_counts_merge_across_files() {
        let dir = tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", "a b b");
        let b = write_file(dir.path(), "b.txt", "c c b");

        let result = CountCoordinator::new(2).run(vec![a, b]);

        assert_eq!(result.frequency.get("b"), 3);
        assert_eq!(result.frequency.get("c"), 2);
        assert_eq!(result.frequency.get("a"), 1);
        assert_eq!(result.files_processed, 2);
        assert_eq!(result.tokens_counted, 6);
    }

    #[test]
    fn test_result_is_independent_of_worker_count() {
        let dir = tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..7)
            .map(|i| {
                write_file(
                    dir.path(),
                    &format!("f{}.txt", i),
                    &format!("alpha beta file{} file{}", i, i),
                )
            })
            .collect();

        let baseline = count_words(paths.clone(), 1);
        for workers in 2..=paths.len() {
            assert_eq!(count_words(paths.clone(), workers), baseline);
        }
    }

    #[test]
    fn test_read_errors_do_not_abort_the_run() {
        let dir = tempdir().unwrap();
        let good = write_file(dir.path(), "good.txt", "x x");
        let missing = dir.path().join("missing.txt");

        let result = CountCoordinator::new(2).run(vec![missing, good]);

        assert_eq!(result.frequency.get("x"), 2);
        assert_eq!(result.files_processed, 1);
        assert_eq!(result.read_errors, 1);
    }

    #[test]
    fn test_duplicate_paths_count_independently() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "dup.txt", "word word");

        let freq = count_words(vec![path.clone(), path], 2);

        assert_eq!(freq.get("word"), 4);
    }
}
