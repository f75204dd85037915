//! Concurrent word counting pipeline
//!
//! This module is the core of the application: it partitions discovered
//! file paths across a bounded pool of worker threads, each of which
//! tokenizes its files and merges counts into one shared store.
//!
//! # Architecture
//!
//! ```text
//!                   ┌──────────────────────────┐
//!                   │     CountCoordinator     │
//!                   │  - round-robin partition │
//!                   │  - spawn / join barrier  │
//!                   └────────────┬─────────────┘
//!                                │
//!        ┌───────────────────────┼───────────────────────┐
//!        │                       │                       │
//!  ┌─────▼─────┐           ┌─────▼─────┐           ┌─────▼─────┐
//!  │  Worker 0 │           │  Worker 1 │           │  Worker N │
//!  │ partition │           │ partition │           │ partition │
//!  │ tokenize  │           │ tokenize  │           │ tokenize  │
//!  └─────┬─────┘           └─────┬─────┘           └─────┬─────┘
//!        │                       │                       │
//!        └───────────────────────┼───────────────────────┘
//!                                ▼
//!                  ┌───────────────────────────┐
//!                  │        WordCounter        │
//!                  │  (lock-protected map,     │
//!                  │   no lost increments)     │
//!                  └───────────────────────────┘
//! ```

pub mod coordinator;
pub mod partition;
pub mod store;
pub mod worker;

pub use coordinator::{count_words, CountCoordinator, CountResult};
pub use partition::{partition, PathPartition};
pub use store::{WordCounter, WordFrequency};
pub use worker::{read_file_to_text, Worker, WorkerStats};
