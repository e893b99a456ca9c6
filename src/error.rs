//! Errors that halt a match
//!
//! Invalid moves are not errors: they are `MoveVerdict`s and only cost health.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The dictionary file exists but could not be read
    #[error("failed to read dictionary {}: {source}", .path.display())]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No dictionary word is long enough to serve as a reference word
    #[error("no reference word available: the dictionary has no word of {min_len}+ letters")]
    EmptyReferencePool { min_len: usize },

    /// No two distinct reference words share a length
    #[error("cannot draw two reference words of the same length ({min_len}+ letters)")]
    NoReferencePair { min_len: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Console input/output failure
    #[error("console error: {0}")]
    Io(#[from] io::Error),
}
