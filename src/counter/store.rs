//! Shared word frequency store
//!
//! One `WordCounter` exists per counting run. The coordinator constructs
//! it, hands an `Arc` clone to every worker for the duration of the run,
//! and consumes it into an immutable `WordFrequency` snapshot once all
//! workers have joined. It is never a process-wide static, so runs stay
//! independent.
//!
//! All mutation goes through `increment`, which takes the single lock.
//! Under concurrent callers no increment is lost: the final count for a
//! word equals the number of increments actually issued for it.

use parking_lot::Mutex;
use std::collections::HashMap;

/// Thread-safe word occurrence counter shared by all workers in a run
#[derive(Debug, Default)]
pub struct WordCounter {
    /// Word -> occurrence count, guarded by a single lock
    words: Mutex<HashMap<String, u64>>,
}

impl WordCounter {
    /// Create an empty counter
    pub fn new() -> Self {
        Self {
            words: Mutex::new(HashMap::new()),
        }
    }

    /// Add one occurrence of `word`
    ///
    /// Empty words are discarded, not counted.
    pub fn increment(&self, word: String) {
        if word.is_empty() {
            return;
        }

        let mut words = self.words.lock();
        *words.entry(word).or_insert(0) += 1;
    }

    /// Consume the counter into its final, immutable frequency snapshot
    pub fn into_frequency(self) -> WordFrequency {
        WordFrequency {
            counts: self.words.into_inner(),
        }
    }

    /// Clone the current contents into a frequency snapshot
    ///
    /// Used when exclusive ownership cannot be reclaimed (a worker died
    /// holding its handle). All live workers must have finished mutating
    /// for the snapshot to be complete.
    pub fn snapshot(&self) -> WordFrequency {
        WordFrequency {
            counts: self.words.lock().clone(),
        }
    }
}

/// Immutable word -> count mapping produced by a completed counting run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    counts: HashMap<String, u64>,
}

impl WordFrequency {
    /// Occurrence count for `word` (zero if never seen)
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn unique_words(&self) -> usize {
        self.counts.len()
    }

    /// Total occurrences across all words
    pub fn total_words(&self) -> u64 {
        self.counts.values().sum()
    }

    /// True if no words were counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (word, count) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl FromIterator<(String, u64)> for WordFrequency {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_increment_and_snapshot() {
        let counter = WordCounter::new();
        counter.increment("cat".into());
        counter.increment("cat".into());
        counter.increment("dog".into());

        let freq = counter.into_frequency();
        assert_eq!(freq.get("cat"), 2);
        assert_eq!(freq.get("dog"), 1);
        assert_eq!(freq.get("fish"), 0);
        assert_eq!(freq.unique_words(), 2);
        assert_eq!(freq.total_words(), 3);
    }

    #[test]
    fn test_empty_words_are_discarded() {
        let counter = WordCounter::new();
        counter.increment(String::new());

        let freq = counter.into_frequency();
        assert!(freq.is_empty());
        assert_eq!(freq.total_words(), 0);
    }

    #[test]
    fn test_no_lost_updates_under_concurrent_increments() {
        let counter = Arc::new(WordCounter::new());
        let threads = 8;
        let per_thread = 1_000;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for i in 0..per_thread {
                        counter.increment("shared".into());
                        counter.increment(format!("own-{}-{}", t, i % 10));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let freq = Arc::try_unwrap(counter).unwrap().into_frequency();
        assert_eq!(freq.get("shared"), (threads * per_thread) as u64);
        assert_eq!(freq.get("own-0-0"), (per_thread / 10) as u64);
        assert_eq!(freq.total_words(), (2 * threads * per_thread) as u64);
    }
}
