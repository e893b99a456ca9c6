//! Match state and the console seam it is driven through

pub mod config;
pub mod console;
pub mod state;

pub use config::GameConfig;
pub use console::{Console, MovePrompt};
pub use state::{Match, MatchOutcome, RoundReport};
