//! Whitespace tokenization
//!
//! A token is a maximal run of non-whitespace characters, lowercased.
//! Runs of consecutive whitespace never produce empty tokens. No
//! Unicode-aware segmentation is attempted beyond whitespace splitting.

/// Tokenize `contents` into lowercase whitespace-delimited words.
///
/// The iterator is lazy: nothing is allocated until a token is pulled.
pub fn tokens(contents: &str) -> impl Iterator<Item = String> + '_ {
    contents.split_whitespace().map(str::to_lowercase)
}
