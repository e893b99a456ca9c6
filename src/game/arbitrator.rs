#![allow(dead_code)]
//! Round arbitration
//!
//! One round gives each player their own reference word (same length,
//! different words). Players move in seat order; each move is validated,
//! settled against health, and followed by the best-answer hint for that
//! player's reference.

use super::dictionary::Dictionary;
use super::normalize::{normalize, word_len};
use super::player::Player;
use super::submersion::longest_submerged;
use super::validation::{validate_move, MoveVerdict};
use log::debug;
use std::collections::HashSet;
use std::time::Duration;

/// Raw input collected for one move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Text as typed, `None` when the read was abandoned or cut off
    pub word: Option<String>,
    /// Time between the prompt and the end of input
    pub elapsed: Duration,
}

impl Submission {
    pub fn new(word: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            word: Some(word.into()),
            elapsed,
        }
    }

    pub fn missing(elapsed: Duration) -> Self {
        Self {
            word: None,
            elapsed,
        }
    }
}

/// What happened on one move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Seat of the player who moved
    pub seat: usize,
    pub player_name: String,
    pub reference: String,
    /// Normalized word, if one was submitted
    pub word: Option<String>,
    pub verdict: MoveVerdict,
    /// Seat of the player who lost health
    pub damaged_seat: usize,
    pub damage: usize,
    /// Longest word still available to the mover in this reference
    pub hint: Option<String>,
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for the player in this seat
    CollectMove(usize),
    Complete,
}

/// Seat of the other player
pub fn opponent(seat: usize) -> usize {
    (seat + 1) % 2
}

/// Runs a single round for two players
pub struct RoundArbitrator {
    round: u32,
    /// Reference word per seat
    references: [String; 2],
    /// Settled moves, in seat order
    outcomes: Vec<MoveOutcome>,
}

impl RoundArbitrator {
    /// Create an arbitrator for a round with one reference word per seat
    pub fn new(round: u32, references: [String; 2]) -> Self {
        debug!(
            "round {}: references {:?} / {:?}",
            round, references[0], references[1]
        );
        Self {
            round,
            references,
            outcomes: Vec::with_capacity(2),
        }
    }

    pub fn reference(&self, seat: usize) -> &str {
        &self.references[seat]
    }

    pub fn references(&self) -> &[String; 2] {
        &self.references
    }

    pub fn phase(&self) -> RoundPhase {
        match self.outcomes.len() {
            n if n < 2 => RoundPhase::CollectMove(n),
            _ => RoundPhase::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == RoundPhase::Complete
    }

    /// Settle the move of the player whose turn it is.
    ///
    /// An invalid move costs the mover the length of their reference word.
    /// A valid move joins the mover's history and costs the opponent the
    /// length of the played word. Returns `None` once both seats have moved.
    pub fn settle_next(
        &mut self,
        submission: &Submission,
        players: &mut [Player; 2],
        dictionary: &Dictionary,
        time_budget: Duration,
    ) -> Option<MoveOutcome> {
        let seat = match self.phase() {
            RoundPhase::CollectMove(seat) => seat,
            RoundPhase::Complete => return None,
        };
        let reference = self.references[seat].clone();

        let word = submission.word.as_deref().map(|raw| normalize(raw.trim()));
        let verdict = validate_move(
            word.as_deref(),
            submission.elapsed,
            time_budget,
            &reference,
            dictionary,
            &players[seat],
        );

        let (damaged_seat, damage) = match (&verdict, &word) {
            (MoveVerdict::Valid, Some(played)) => {
                players[seat].record(played.clone());
                (opponent(seat), word_len(played))
            }
            _ => (seat, word_len(&reference)),
        };
        players[damaged_seat].take_damage(damage);

        let hint = hint_for(&reference, dictionary, &players[seat]);
        debug!(
            "round {} seat {}: {:?} -> {:?}, -{} to seat {}",
            self.round, seat, word, verdict, damage, damaged_seat
        );

        let outcome = MoveOutcome {
            seat,
            player_name: players[seat].name.clone(),
            reference,
            word,
            verdict,
            damaged_seat,
            damage,
            hint,
        };
        self.outcomes.push(outcome.clone());
        Some(outcome)
    }

    /// Settled moves so far
    pub fn outcomes(&self) -> &[MoveOutcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<MoveOutcome> {
        self.outcomes
    }
}

/// Best answer still open to `player` for `reference`: the reference word
/// and everything the player already played are excluded.
pub fn hint_for(reference: &str, dictionary: &Dictionary, player: &Player) -> Option<String> {
    let mut forbidden: HashSet<String> = player.history().clone();
    forbidden.insert(reference.to_string());
    longest_submerged(reference, dictionary, &forbidden).map(str::to_string)
}
