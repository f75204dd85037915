//! topwords - Concurrent Word Counter
//!
//! Counts word occurrences across a set of files and directories
//! (recursively) and reports the top-N most frequent words, ties broken
//! alphabetically.
//!
//! # Features
//!
//! - **Parallel Counting**: Discovered file paths are partitioned
//!   round-robin across a bounded pool of worker threads.
//!
//! - **One Shared Store**: Workers merge counts into a single
//!   lock-protected frequency map; no increment is lost under any
//!   interleaving.
//!
//! - **Fault Isolation**: An unreadable file or a dead worker costs a
//!   warning and some undercounting, never the run.
//!
//! - **Deterministic Ranking**: The final ranking depends only on the
//!   merged counts, not on worker scheduling.
//!
//! # Architecture
//!
//! ```text
//! CLI args ──► PathSet (recursive discovery, readability filter)
//!                  │
//!                  ▼
//!          CountCoordinator
//!          round-robin partitioning, one worker thread per
//!          non-empty partition, join barrier
//!                  │
//!        ┌─────────┼─────────┐
//!   ┌────▼───┐ ┌───▼────┐ ┌──▼─────┐
//!   │Worker 0│ │Worker 1│ │Worker N│   read file → tokenize →
//!   └────┬───┘ └───┬────┘ └──┬─────┘   increment shared counter
//!        └─────────┼─────────┘
//!                  ▼
//!             WordCounter ──► WordFrequency ──► top_n ──► report
//! ```
//!
//! # Example
//!
//! ```bash
//! # Top 10 words across a directory tree
//! topwords 10 ./docs
//!
//! # Multiple inputs, four workers, skipping compressed files
//! topwords 25 notes.txt ./archive -w 4 --exclude '\.gz$'
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod paths;
pub mod progress;
pub mod ranking;
pub mod tokenize;

pub use config::{CliArgs, CountConfig};
pub use counter::{count_words, CountCoordinator, CountResult, WordCounter, WordFrequency};
pub use error::{Result, TopWordsError};
pub use paths::PathSet;
pub use ranking::{top_n, RankedEntry};
