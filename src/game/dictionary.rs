#![allow(dead_code)]
//! Dictionary module for word validation
//!
//! Loads a newline-delimited word list once at startup. Entries are
//! normalized on load, so lookups are accent- and case-insensitive as long
//! as callers normalize their input the same way.

use super::normalize::{normalize, word_len};
use crate::error::GameError;
use log::{info, warn};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Default dictionary file, relative to the working directory
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionnaire.txt";

/// Immutable set of normalized words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries.
    /// Entries are trimmed and normalized; blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref().trim()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a dictionary from a text file, one word per line.
    ///
    /// A missing file is not fatal: it is logged and an empty dictionary is
    /// returned. Any other read failure is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                let dictionary = Self::from_words(contents.lines());
                info!(
                    "loaded {} words from {}",
                    dictionary.len(),
                    path.display()
                );
                Ok(dictionary)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("dictionary file {} not found, using an empty dictionary", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(GameError::DictionaryRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Check membership of an already normalized word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over every word (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words at least `min_len` characters long, sorted for stable draws
    pub fn words_at_least(&self, min_len: usize) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().filter(|w| word_len(w) >= min_len).collect();
        words.sort_unstable();
        words
    }

    /// Returns the total number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
