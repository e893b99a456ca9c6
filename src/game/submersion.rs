//! Submerged words
//!
//! A word is submerged in a reference word when its letters appear in the
//! reference, in order, though not necessarily next to each other:
//! "cts" is submerged in "chats", "tsc" is not.

use super::dictionary::Dictionary;
use super::normalize::word_len;
use log::debug;
use std::collections::HashSet;

/// Check whether `candidate` can be obtained from `reference` by deleting
/// zero or more characters.
///
/// Single pass over `reference`, no allocation. The empty candidate is
/// submerged in anything, and every word is submerged in itself.
pub fn is_submerged(candidate: &str, reference: &str) -> bool {
    let mut wanted = candidate.chars().peekable();
    for c in reference.chars() {
        match wanted.peek() {
            Some(&w) if w == c => {
                wanted.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    wanted.peek().is_none()
}

/// Find the longest dictionary word submerged in `reference` that is not
/// in `forbidden`.
///
/// Scans the whole dictionary. Among candidates of maximal length the
/// lexicographically smallest one is returned, so the result does not
/// depend on set iteration order.
pub fn longest_submerged<'d>(
    reference: &str,
    dictionary: &'d Dictionary,
    forbidden: &HashSet<String>,
) -> Option<&'d str> {
    let best = dictionary
        .iter()
        .filter(|word| !forbidden.contains(*word))
        .filter(|word| is_submerged(word, reference))
        .map(|word| (word_len(word), word))
        .min_by(|(len_a, a), (len_b, b)| len_b.cmp(len_a).then_with(|| a.cmp(b)))
        .map(|(_, word)| word);

    debug!("longest submerged in {:?}: {:?}", reference, best);
    best
}
