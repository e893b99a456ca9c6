//! The seam between the match and whoever plays it
//!
//! A `Console` supplies moves and is told what happened. The terminal
//! implementation lives in `tui`; tests script one in memory.

use super::state::{MatchOutcome, RoundReport};
use crate::game::arbitrator::{MoveOutcome, Submission};
use crate::game::player::Player;
use std::io;
use std::time::Duration;

/// Everything a player needs to see before typing a move
#[derive(Debug, Clone, Copy)]
pub struct MovePrompt<'a> {
    pub round: u32,
    pub player: &'a Player,
    pub reference: &'a str,
    pub time_budget: Duration,
}

pub trait Console {
    /// Collect one move. Implementations may cut the read off at the
    /// deadline and return `Submission::missing`.
    fn read_move(&mut self, prompt: &MovePrompt<'_>) -> io::Result<Submission>;

    fn round_started(&mut self, _round: u32) -> io::Result<()> {
        Ok(())
    }

    fn move_settled(&mut self, _outcome: &MoveOutcome) -> io::Result<()> {
        Ok(())
    }

    fn round_finished(&mut self, _report: &RoundReport) -> io::Result<()> {
        Ok(())
    }

    fn match_finished(&mut self, _outcome: &MatchOutcome) -> io::Result<()> {
        Ok(())
    }
}
