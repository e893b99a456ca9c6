//! Word normalization
//!
//! Every word is compared in its normalized form: canonical decomposition
//! (NFD), combining marks dropped, then lowercased. "Éléphant" and
//! "elephant" normalize to the same word.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a word for dictionary comparison.
///
/// Pure and total: any input, including the empty string, yields a string.
pub fn normalize(word: &str) -> String {
    word.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Length of a word in characters (not bytes).
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}
