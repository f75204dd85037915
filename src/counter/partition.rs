//! Round-robin path partitioning
//!
//! The discovered path list is split across workers by assigning the i-th
//! path to partition `i % worker_count`, preserving the relative order of
//! paths within each partition. Round-robin keeps partition sizes within
//! one of each other for any path count; it does not account for skewed
//! file sizes, which is an accepted trade-off when sizes are unknown up
//! front.
//!
//! Partitions are disjoint, their union is the full input, and a
//! partition is never empty: with fewer paths than workers, fewer
//! partitions (and fewer workers) result.

use std::path::PathBuf;

/// An ordered list of file paths owned by exactly one worker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPartition {
    paths: Vec<PathBuf>,
}

impl PathPartition {
    fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Paths in assigned order
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of paths in this partition
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True if the partition holds no paths
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Consume the partition into its path list
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }
}

/// Split `paths` into at most `worker_count` round-robin partitions
///
/// Returns only non-empty partitions; an empty input produces no
/// partitions at all. `worker_count` must be positive (validated by the
/// configuration layer).
pub fn partition(paths: Vec<PathBuf>, worker_count: usize) -> Vec<PathPartition> {
    debug_assert!(worker_count > 0, "worker_count must be positive");

    let slots = worker_count.min(paths.len());
    if slots == 0 {
        return Vec::new();
    }

    let mut partitions = vec![PathPartition::default(); slots];
    for (i, path) in paths.into_iter().enumerate() {
        partitions[i % worker_count].push(path);
    }

    partitions
}
