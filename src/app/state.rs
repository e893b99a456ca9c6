#![allow(dead_code)]
//! Match state management
//!
//! A `Match` owns the dictionary, the reference pool, both players and the
//! RNG. Rounds are played until a player's health drops to zero or below;
//! the check happens between rounds, so a round always finishes for both
//! players.

use super::config::GameConfig;
use super::console::{Console, MovePrompt};
use crate::error::GameError;
use crate::game::arbitrator::{MoveOutcome, RoundArbitrator, RoundPhase};
use crate::game::dictionary::Dictionary;
use crate::game::player::Player;
use crate::game::ReferencePool;
use log::info;
use rand::rngs::StdRng;

/// Summary of one completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    /// Player name per seat
    pub players: [String; 2],
    /// Reference word per seat
    pub references: [String; 2],
    /// Both moves, in seat order
    pub moves: Vec<MoveOutcome>,
    /// Health per seat once the round is settled
    pub health: [i32; 2],
}

/// How a match ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Winner {
        seat: usize,
        name: String,
        health: i32,
    },
    /// Both players ended on the same health
    Draw { health: i32 },
}

impl MatchOutcome {
    /// The player with strictly more health wins
    pub fn decide(players: &[Player; 2]) -> Self {
        let [first, second] = players;
        if first.health == second.health {
            return MatchOutcome::Draw {
                health: first.health,
            };
        }
        let seat = if first.health > second.health { 0 } else { 1 };
        MatchOutcome::Winner {
            seat,
            name: players[seat].name.clone(),
            health: players[seat].health,
        }
    }
}

/// A two-player match
pub struct Match {
    config: GameConfig,
    dictionary: Dictionary,
    pool: ReferencePool,
    players: [Player; 2],
    /// Last round started (0 before the first)
    round: u32,
    rng: StdRng,
    reports: Vec<RoundReport>,
}

impl Match {
    /// Set up a match. Fails fast when the dictionary cannot supply
    /// reference word pairs.
    pub fn new(config: GameConfig, dictionary: Dictionary, rng: StdRng) -> Result<Self, GameError> {
        config.validate()?;
        let pool = ReferencePool::new(&dictionary, config.min_reference_len)?;
        let [first, second] = config.player_names.clone();
        let players = [
            Player::new(first, config.starting_health),
            Player::new(second, config.starting_health),
        ];

        info!(
            "new match: {} words, {} reference words, {} HP, {}s per move",
            dictionary.len(),
            pool.len(),
            config.starting_health,
            config.time_budget.as_secs()
        );

        Ok(Self {
            config,
            dictionary,
            pool,
            players,
            round: 0,
            rng,
            reports: Vec::new(),
        })
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Number of rounds played so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn reports(&self) -> &[RoundReport] {
        &self.reports
    }

    /// True once any player is at zero health or below
    pub fn is_over(&self) -> bool {
        self.players.iter().any(|p| !p.is_alive())
    }

    /// Play one full round: draw references, collect and settle both moves.
    pub fn play_round<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<RoundReport, GameError> {
        self.round += 1;
        let round = self.round;
        console.round_started(round)?;

        let (first, second) = self.pool.draw_pair(&mut self.rng)?;
        let mut arbitrator = RoundArbitrator::new(round, [first, second]);

        while let RoundPhase::CollectMove(seat) = arbitrator.phase() {
            let prompt = MovePrompt {
                round,
                player: &self.players[seat],
                reference: arbitrator.reference(seat),
                time_budget: self.config.time_budget,
            };
            let submission = console.read_move(&prompt)?;

            if let Some(outcome) = arbitrator.settle_next(
                &submission,
                &mut self.players,
                &self.dictionary,
                self.config.time_budget,
            ) {
                console.move_settled(&outcome)?;
            }
        }

        let report = RoundReport {
            round,
            players: [self.players[0].name.clone(), self.players[1].name.clone()],
            references: arbitrator.references().clone(),
            moves: arbitrator.into_outcomes(),
            health: [self.players[0].health, self.players[1].health],
        };
        info!("round {} done, health {:?}", round, report.health);

        console.round_finished(&report)?;
        self.reports.push(report.clone());
        Ok(report)
    }

    /// Play rounds until a player is eliminated, then declare the outcome.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<MatchOutcome, GameError> {
        while !self.is_over() {
            self.play_round(console)?;
        }

        let outcome = MatchOutcome::decide(&self.players);
        info!("match over after {} rounds: {:?}", self.round, outcome);
        console.match_finished(&outcome)?;
        Ok(outcome)
    }
}
