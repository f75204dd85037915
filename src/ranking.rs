//! Top-N selection over the final frequency map
//!
//! Ranking is deterministic: the map's final state, not the arrival order
//! of increments during counting, decides the output. Entries order by
//! count descending, then word ascending.

use crate::counter::store::WordFrequency;
use std::cmp::Ordering;

/// A (word, count) pair with the ranking total order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// The word, already lowercase
    pub word: String,

    /// Occurrence count
    pub count: u64,
}

impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Select the `n` highest-count entries from `freq`
///
/// Returns `min(n, distinct words)` entries; `n` larger than the map is
/// not an error, and `n == 0` yields an empty vector. Validating that a
/// user-supplied top-N is positive is the CLI's concern.
pub fn top_n(freq: &WordFrequency, n: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = freq
        .iter()
        .map(|(word, count)| RankedEntry {
            word: word.to_owned(),
            count,
        })
        .collect();

    // Words are distinct, so the total order has no equal elements and
    // an unstable sort is still deterministic.
    entries.sort_unstable();
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(pairs: &[(&str, u64)]) -> WordFrequency {
        pairs
            .iter()
            .map(|(w, c)| (w.to_string(), *c))
            .collect()
    }

    fn words(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_orders_by_count_descending() {
        let ranked = top_n(&freq(&[("a", 1), ("b", 3), ("c", 2)]), 3);

        assert_eq!(words(&ranked), vec!["b", "c", "a"]);
        assert_eq!(ranked[0].count, 3);
    }

    #[test]
    fn test_ties_break_by_ascending_word() {
        let ranked = top_n(&freq(&[("pear", 2), ("apple", 2), ("fig", 5)]), 3);

        assert_eq!(words(&ranked), vec!["fig", "apple", "pear"]);
    }

    #[test]
    fn test_truncates_to_n() {
        let ranked = top_n(&freq(&[("a", 1), ("b", 3), ("c", 2)]), 2);

        assert_eq!(words(&ranked), vec!["b", "c"]);
    }

    #[test]
    fn test_n_larger_than_map_returns_all() {
        let ranked = top_n(&freq(&[("a", 1), ("b", 2)]), 100);

        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_zero_n_and_empty_map() {
        assert!(top_n(&freq(&[("a", 1)]), 0).is_empty());
        assert!(top_n(&WordFrequency::default(), 5).is_empty());
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let f = freq(&[("x", 4), ("y", 4), ("z", 1)]);

        assert_eq!(top_n(&f, 3), top_n(&f, 3));
    }
}
