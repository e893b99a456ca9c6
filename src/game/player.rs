//! Player record: name, health and the words already played

use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// Signed on purpose: a round can push health below zero
    pub health: i32,
    history: HashSet<String>,
}

impl Player {
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self {
            name: name.into(),
            health,
            history: HashSet::new(),
        }
    }

    /// A player is eliminated once health reaches zero or below
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn has_played(&self, word: &str) -> bool {
        self.history.contains(word)
    }

    /// Record a successfully played word. History never shrinks.
    pub fn record(&mut self, word: String) {
        self.history.insert(word);
    }

    pub fn history(&self) -> &HashSet<String> {
        &self.history
    }

    pub fn take_damage(&mut self, amount: usize) {
        self.health -= i32::try_from(amount).unwrap_or(i32::MAX);
    }
}
