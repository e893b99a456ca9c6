//! Match configuration

use crate::error::GameError;
use crate::game::{MAX_TIME_BUDGET_SECS, MIN_REFERENCE_LEN, STARTING_HEALTH, TIME_BUDGET_SECS};
use std::time::Duration;

/// Settings injected into a `Match` at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Health both players start with
    pub starting_health: i32,
    /// Time allowed per move
    pub time_budget: Duration,
    /// Shortest reference word
    pub min_reference_len: usize,
    pub player_names: [String; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: STARTING_HEALTH,
            time_budget: Duration::from_secs(TIME_BUDGET_SECS),
            min_reference_len: MIN_REFERENCE_LEN,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }
}

impl GameConfig {
    /// Reject settings under which a match cannot be played
    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_health <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "starting health must be positive, got {}",
                self.starting_health
            )));
        }
        if self.time_budget.is_zero() {
            return Err(GameError::InvalidConfig(
                "time budget must be at least one second".to_string(),
            ));
        }
        if self.time_budget > Duration::from_secs(MAX_TIME_BUDGET_SECS) {
            return Err(GameError::InvalidConfig(format!(
                "time budget must be at most {}s, got {}s",
                MAX_TIME_BUDGET_SECS,
                self.time_budget.as_secs()
            )));
        }
        if self.min_reference_len == 0 {
            return Err(GameError::InvalidConfig(
                "minimum reference length must be positive".to_string(),
            ));
        }
        if self.player_names[0] == self.player_names[1] {
            return Err(GameError::InvalidConfig(format!(
                "players need distinct names, both are {:?}",
                self.player_names[0]
            )));
        }
        Ok(())
    }
}
