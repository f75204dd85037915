//! Worker thread logic for parallel word counting
//!
//! Each worker:
//! - Owns exactly one path partition, moved into its thread
//! - Processes the partition's files sequentially, in assigned order
//! - Reads each file fully as UTF-8 text and tokenizes it
//! - Feeds every token into the shared counter
//!
//! A file that fails to read is logged and contributes zero tokens; the
//! rest of the partition is still processed. Workers share no mutable
//! state with each other beyond the counter itself.

use crate::counter::partition::PathPartition;
use crate::counter::store::WordCounter;
use crate::error::{CountError, WorkerError};
use crate::tokenize;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, trace, warn};

/// Statistics collected by a worker
#[derive(Debug, Default)]
pub struct WorkerStats {
    /// Files fully processed
    pub files_processed: AtomicU64,

    /// Tokens fed into the counter
    pub tokens_counted: AtomicU64,

    /// Bytes of text read
    pub bytes_read: AtomicU64,

    /// Files skipped due to read failures
    pub read_errors: AtomicU64,
}

impl WorkerStats {
    fn record_file(&self) {
        self.files_processed.fetch_add(1, Ordering::Relaxed);
    }

    fn record_tokens(&self, count: u64) {
        self.tokens_counted.fetch_add(count, Ordering::Relaxed);
    }

    fn record_bytes(&self, bytes: u64) {
        self.bytes_read.fetch_add(bytes, Ordering::Relaxed);
    }

    fn record_read_error(&self) {
        self.read_errors.fetch_add(1, Ordering::Relaxed);
    }
}

/// A worker thread that counts words in its partition
pub struct Worker {
    /// Worker ID
    id: usize,

    /// Thread handle
    handle: Option<JoinHandle<()>>,

    /// Worker statistics
    stats: Arc<WorkerStats>,
}

impl Worker {
    /// Spawn a new worker thread over `partition`
    pub fn spawn(
        id: usize,
        partition: PathPartition,
        counter: Arc<WordCounter>,
    ) -> Result<Self, WorkerError> {
        let stats = Arc::new(WorkerStats::default());
        let stats_clone = Arc::clone(&stats);

        let handle = thread::Builder::new()
            .name(format!("counter-{}", id))
            .spawn(move || worker_loop(id, partition, counter, stats_clone))
            .map_err(|e| WorkerError::SpawnFailed {
                id,
                reason: e.to_string(),
            })?;

        Ok(Self {
            id,
            handle: Some(handle),
            stats,
        })
    }

    /// Get worker ID
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get a shared handle to this worker's statistics
    ///
    /// The handle stays valid after `join`, so the coordinator reads
    /// final values once the barrier has passed.
    pub fn stats_handle(&self) -> Arc<WorkerStats> {
        Arc::clone(&self.stats)
    }

    /// Wait for the worker to finish
    pub fn join(mut self) -> Result<(), WorkerError> {
        if let Some(handle) = self.handle.take() {
            handle.join().map_err(|_| WorkerError::Panicked { id: self.id })
        } else {
            Ok(())
        }
    }
}

/// Main worker loop: process every file in the partition, in order
fn worker_loop(
    id: usize,
    partition: PathPartition,
    counter: Arc<WordCounter>,
    stats: Arc<WorkerStats>,
) {
    debug!(worker = id, files = partition.len(), "Worker starting");

    for path in partition.into_paths() {
        match process_file(&path, &counter) {
            Ok(outcome) => {
                stats.record_file();
                stats.record_tokens(outcome.tokens);
                stats.record_bytes(outcome.bytes);
                trace!(
                    worker = id,
                    path = %path.display(),
                    tokens = outcome.tokens,
                    "File processed"
                );
            }
            Err(e) => {
                stats.record_read_error();
                warn!(worker = id, error = %e, "File skipped");
            }
        }
    }

    debug!(
        worker = id,
        files = stats.files_processed.load(Ordering::Relaxed),
        tokens = stats.tokens_counted.load(Ordering::Relaxed),
        errors = stats.read_errors.load(Ordering::Relaxed),
        "Worker finished"
    );
}

/// Outcome of processing one file
struct FileOutcome {
    tokens: u64,
    bytes: u64,
}

/// Read `path` fully as UTF-8 text
pub fn read_file_to_text(path: &Path) -> Result<String, CountError> {
    fs::read_to_string(path).map_err(|e| CountError::read_failed(path, e))
}

/// Tokenize one file and feed every token into the counter
fn process_file(path: &Path, counter: &WordCounter) -> Result<FileOutcome, CountError> {
    let text = read_file_to_text(path)?;
    let bytes = text.len() as u64;

    let mut tokens = 0u64;
    for token in tokenize::tokens(&text) {
        counter.increment(token);
        tokens += 1;
    }

    Ok(FileOutcome { tokens, bytes })
}

/// Aggregate statistics from multiple workers
///
/// Returns (files, tokens, bytes, read_errors).
pub fn aggregate_stats(stats: &[Arc<WorkerStats>]) -> (u64, u64, u64, u64) {
    let mut files = 0u64;
    let mut tokens = 0u64;
    let mut bytes = 0u64;
    let mut errors = 0u64;

    for s in stats {
        files += s.files_processed.load(Ordering::Relaxed);
        tokens += s.tokens_counted.load(Ordering::Relaxed);
        bytes += s.bytes_read.load(Ordering::Relaxed);
        errors += s.read_errors.load(Ordering::Relaxed);
    }

    (files, tokens, bytes, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::partition::partition;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_worker_stats_recording() {
        let stats = WorkerStats::default();

        stats.record_file();
        stats.record_tokens(10);
        stats.record_bytes(1024);
        stats.record_read_error();

        assert_eq!(stats.files_processed.load(Ordering::Relaxed), 1);
        assert_eq!(stats.tokens_counted.load(Ordering::Relaxed), 10);
        assert_eq!(stats.bytes_read.load(Ordering::Relaxed), 1024);
        assert_eq!(stats.read_errors.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_worker_counts_its_partition() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        File::create(&path)
            .unwrap()
            .write_all(b"The the THE cat")
            .unwrap();

        let counter = Arc::new(WordCounter::new());
        let parts = partition(vec![path], 1);
        let worker = Worker::spawn(0, parts.into_iter().next().unwrap(), Arc::clone(&counter))
            .unwrap();

        let stats = worker.stats_handle();
        worker.join().unwrap();

        assert_eq!(stats.files_processed.load(Ordering::Relaxed), 1);
        assert_eq!(stats.tokens_counted.load(Ordering::Relaxed), 4);
        assert_eq!(stats.read_errors.load(Ordering::Relaxed), 0);

        let freq = counter.snapshot();
        assert_eq!(freq.get("the"), 3);
        assert_eq!(freq.get("cat"), 1);
    }

    #[test]
    fn test_missing_file_contributes_zero_tokens() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        File::create(&good).unwrap().write_all(b"x x").unwrap();
        let missing = dir.path().join("missing.txt");

        let counter = Arc::new(WordCounter::new());
        let parts = partition(vec![missing, good], 1);
        let worker = Worker::spawn(0, parts.into_iter().next().unwrap(), Arc::clone(&counter))
            .unwrap();

        let stats = worker.stats_handle();
        worker.join().unwrap();

        assert_eq!(stats.files_processed.load(Ordering::Relaxed), 1);
        assert_eq!(stats.read_errors.load(Ordering::Relaxed), 1);
        assert_eq!(counter.snapshot().get("x"), 2);
    }

    #[test]
    fn test_non_utf8_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        File::create(&path).unwrap().write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let err = read_file_to_text(&path).unwrap_err();
        assert!(matches!(err, CountError::ReadFailed { .. }));
    }
}
