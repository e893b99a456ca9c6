//! Move validation
//!
//! A move is checked, in order, against:
//! - The time budget
//! - Presence of a word
//! - The round's reference word (always forbidden)
//! - Dictionary presence
//! - The player's own history
//! - Submersion in the reference word

use super::dictionary::Dictionary;
use super::player::Player;
use super::submersion::is_submerged;
use std::time::Duration;

/// Result of move validation with specific reasons
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveVerdict {
    /// Word is valid
    Valid,
    /// Submitted after the time budget ran out
    TimedOut { elapsed: Duration },
    /// Nothing submitted, or only whitespace/marks
    NoWord,
    /// Word is the reference word itself
    IsReference,
    /// Word not found in dictionary
    NotInDictionary,
    /// Word already played by this player in an earlier round
    AlreadyPlayed,
    /// Letters do not appear in order in the reference word
    NotSubmerged,
}

impl MoveVerdict {
    /// Returns true if the move counts
    pub fn is_valid(&self) -> bool {
        matches!(self, MoveVerdict::Valid)
    }

    /// Returns a user-friendly message
    pub fn message(&self) -> String {
        match self {
            MoveVerdict::Valid => "Valid word!".to_string(),
            MoveVerdict::TimedOut { elapsed } => {
                format!("Time exceeded ({:.1}s)", elapsed.as_secs_f64())
            }
            MoveVerdict::NoWord => "No word".to_string(),
            MoveVerdict::IsReference => "Forbidden this round".to_string(),
            MoveVerdict::NotInDictionary => "Not in dictionary".to_string(),
            MoveVerdict::AlreadyPlayed => "Already played".to_string(),
            MoveVerdict::NotSubmerged => "Not submerged".to_string(),
        }
    }
}

/// Validate an already normalized word played against `reference`.
pub fn validate_move(
    word: Option<&str>,
    elapsed: Duration,
    time_budget: Duration,
    reference: &str,
    dictionary: &Dictionary,
    player: &Player,
) -> MoveVerdict {
    if elapsed > time_budget {
        return MoveVerdict::TimedOut { elapsed };
    }

    let word = match word {
        Some(w) if !w.is_empty() => w,
        _ => return MoveVerdict::NoWord,
    };

    if word == reference {
        return MoveVerdict::IsReference;
    }

    if !dictionary.contains(word) {
        return MoveVerdict::NotInDictionary;
    }

    if player.has_played(word) {
        return MoveVerdict::AlreadyPlayed;
    }

    if !is_submerged(word, reference) {
        return MoveVerdict::NotSubmerged;
    }

    MoveVerdict::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET: Duration = Duration::from_secs(15);

    fn dict() -> Dictionary {
        Dictionary::from_words(["chat", "chaton", "chatons", "ton", "maison"])
    }

    fn check(word: Option<&str>, player: &Player) -> MoveVerdict {
        validate_move(word, Duration::from_secs(3), BUDGET, "chatons", &dict(), player)
    }

    #[test]
    fn test_valid_word() {
        let player = Player::new("Player 1", 50);
        assert_eq!(check(Some("chat"), &player), MoveVerdict::Valid);
        assert_eq!(check(Some("chaton"), &player), MoveVerdict::Valid);
    }

    #[test]
    fn test_timed_out() {
        let player = Player::new("Player 1", 50);
        let elapsed = Duration::from_millis(15_001);
        let verdict = validate_move(Some("chat"), elapsed, BUDGET, "chatons", &dict(), &player);
        assert_eq!(verdict, MoveVerdict::TimedOut { elapsed });
    }

    #[test]
    fn test_exactly_on_budget_counts() {
        let player = Player::new("Player 1", 50);
        let verdict = validate_move(Some("chat"), BUDGET, BUDGET, "chatons", &dict(), &player);
        assert_eq!(verdict, MoveVerdict::Valid);
    }

    #[test]
    fn test_no_word() {
        let player = Player::new("Player 1", 50);
        assert_eq!(check(None, &player), MoveVerdict::NoWord);
        assert_eq!(check(Some(""), &player), MoveVerdict::NoWord);
    }

    #[test]
    fn test_reference_word_forbidden() {
        let player = Player::new("Player 1", 50);
        // In the dictionary and submerged in itself, still refused
        assert_eq!(check(Some("chatons"), &player), MoveVerdict::IsReference);

        // Also refused when the reference is not a dictionary word
        let verdict = validate_move(
            Some("zzzzzz"),
            Duration::ZERO,
            BUDGET,
            "zzzzzz",
            &dict(),
            &player,
        );
        assert_eq!(verdict, MoveVerdict::IsReference);
    }

    #[test]
    fn test_not_in_dictionary() {
        let player = Player::new("Player 1", 50);
        assert_eq!(check(Some("chats"), &player), MoveVerdict::NotInDictionary);
    }

    #[test]
    fn test_already_played() {
        let mut player = Player::new("Player 1", 50);
        player.record("chat".to_string());
        assert_eq!(check(Some("chat"), &player), MoveVerdict::AlreadyPlayed);
    }

    #[test]
    fn test_not_submerged() {
        let player = Player::new("Player 1", 50);
        assert_eq!(check(Some("maison"), &player), MoveVerdict::NotSubmerged);
    }

    #[test]
    fn test_validation_order() {
        // Timeout takes precedence over everything else
        let player = Player::new("Player 1", 50);
        let verdict = validate_move(
            None,
            Duration::from_secs(20),
            BUDGET,
            "chatons",
            &dict(),
            &player,
        );
        assert!(matches!(verdict, MoveVerdict::TimedOut { .. }));
    }

    #[test]
    fn test_message_format() {
        assert_eq!(MoveVerdict::Valid.message(), "Valid word!");
        assert_eq!(
            MoveVerdict::TimedOut {
                elapsed: Duration::from_millis(16_500)
            }
            .message(),
            "Time exceeded (16.5s)"
        );
        assert_eq!(MoveVerdict::IsReference.message(), "Forbidden this round");
        assert_eq!(MoveVerdict::NotSubmerged.message(), "Not submerged");
    }
}
