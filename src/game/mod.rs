//! Game logic: dictionary, submerged words, move validation, rounds

pub mod arbitrator;
pub mod dictionary;
pub mod normalize;
pub mod player;
pub mod submersion;
pub mod validation;

use crate::error::GameError;
use log::debug;
use normalize::word_len;
use rand::prelude::*;
use std::collections::BTreeMap;

/// Health each player starts a match with
pub const STARTING_HEALTH: i32 = 50;
/// Seconds a player has to enter a word
pub const TIME_BUDGET_SECS: u64 = 15;
/// Longest time budget a match accepts
pub const MAX_TIME_BUDGET_SECS: u64 = 3600;
/// Shortest word that can be drawn as a reference word
pub const MIN_REFERENCE_LEN: usize = 6;

/// The words eligible as reference words, grouped by length.
///
/// Only lengths shared by at least two words are kept, so a pair of
/// distinct same-length references can always be drawn without retrying.
#[derive(Debug, Clone)]
pub struct ReferencePool {
    /// Every eligible word, sorted
    words: Vec<String>,
    /// Eligible words keyed by length
    by_length: BTreeMap<usize, Vec<String>>,
    min_len: usize,
}

impl ReferencePool {
    /// Build the pool from the dictionary words at least `min_len` long.
    pub fn new(dictionary: &dictionary::Dictionary, min_len: usize) -> Result<Self, GameError> {
        let long_words = dictionary.words_at_least(min_len);
        if long_words.is_empty() {
            return Err(GameError::EmptyReferencePool { min_len });
        }

        let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for word in long_words {
            by_length.entry(word_len(word)).or_default().push(word.to_string());
        }
        by_length.retain(|_, words| words.len() >= 2);

        if by_length.is_empty() {
            return Err(GameError::NoReferencePair { min_len });
        }

        let mut words: Vec<String> = by_length.values().flatten().cloned().collect();
        words.sort_unstable();

        debug!(
            "reference pool: {} words across {} lengths",
            words.len(),
            by_length.len()
        );

        Ok(Self {
            words,
            by_length,
            min_len,
        })
    }

    /// Draw two distinct reference words of the same length.
    ///
    /// The first word is uniform over the pool, the second uniform over
    /// the other words of that length.
    pub fn draw_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(String, String), GameError> {
        let no_pair = || GameError::NoReferencePair {
            min_len: self.min_len,
        };

        let first = self.words.choose(rng).ok_or_else(no_pair)?;
        let others: Vec<&String> = self
            .by_length
            .get(&word_len(first))
            .map(|words| words.iter().filter(|w| *w != first).collect())
            .unwrap_or_default();
        let second = others.choose(rng).ok_or_else(no_pair)?;

        Ok((first.clone(), (*second).clone()))
    }

    /// Number of eligible words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }
}
