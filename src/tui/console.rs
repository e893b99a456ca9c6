//! Line-based terminal console
//!
//! When stdin is a terminal the deadline is enforced: keys are read in raw
//! mode with a poll timeout and the pending read is dropped once the time
//! budget runs out. Piped input falls back to a blocking line read, and the
//! elapsed time is checked afterwards by move validation.

use super::terminal::RawMode;
use crate::app::{Console, MatchOutcome, MovePrompt, RoundReport};
use crate::game::arbitrator::{opponent, MoveOutcome, Submission};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Stylize;
use log::debug;
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};
use std::time::Instant;

const RULE: &str = "==============================";

/// Console reading moves from `input` and printing to `out`
pub struct TerminalConsole<R, W> {
    input: R,
    out: W,
    /// Read keys in raw mode with a hard deadline
    interactive: bool,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin/stdout
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        debug!("console on stdio, interactive: {}", interactive);
        Self::new(stdin.lock(), io::stdout(), interactive)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, out: W, interactive: bool) -> Self {
        Self {
            input,
            out,
            interactive,
        }
    }

    /// Blocking line read; time is only measured
    fn read_line(&mut self, started: Instant) -> io::Result<Submission> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line);
        let elapsed = started.elapsed();
        match read {
            Ok(0) => return Ok(Submission::missing(elapsed)),
            Ok(_) => {}
            // Undecodable line: consumed, counts as no word
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                debug!("discarding non UTF-8 input line");
                return Ok(Submission::missing(elapsed));
            }
            Err(e) => return Err(e),
        }
        Ok(Submission::new(line.trim_end_matches(['\r', '\n']), elapsed))
    }

    /// Key-by-key read that gives up at the deadline
    fn read_until_deadline(&mut self, prompt: &MovePrompt<'_>, started: Instant) -> io::Result<Submission> {
        let deadline = started.checked_add(prompt.time_budget).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "time budget out of range")
        })?;
        let mut typed = String::new();
        let _raw = RawMode::enter()?;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                write!(self.out, "\r\n")?;
                self.out.flush()?;
                return Ok(Submission::missing(started.elapsed()));
            }

            if !event::poll(remaining)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Enter => {
                    write!(self.out, "\r\n")?;
                    self.out.flush()?;
                    return Ok(Submission::new(typed, started.elapsed()));
                }
                KeyCode::Esc => {
                    write!(self.out, "\r\n")?;
                    self.out.flush()?;
                    return Ok(Submission::missing(started.elapsed()));
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    write!(self.out, "\r\n")?;
                    self.out.flush()?;
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
                }
                KeyCode::Backspace => {
                    if typed.pop().is_some() {
                        write!(self.out, "\u{8} \u{8}")?;
                    }
                }
                KeyCode::Char(c) => {
                    typed.push(c);
                    write!(self.out, "{}", c)?;
                }
                _ => {}
            }
            self.out.flush()?;
        }
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_move(&mut self, prompt: &MovePrompt<'_>) -> io::Result<Submission> {
        debug!("round {}: waiting for {}", prompt.round, prompt.player.name);
        writeln!(
            self.out,
            "{} -> word submerged in '{}' ({}s):",
            prompt.player.name.as_str().bold(),
            prompt.reference.cyan(),
            prompt.time_budget.as_secs()
        )?;
        write!(self.out, "> ")?;
        self.out.flush()?;

        let started = Instant::now();
        if self.interactive {
            self.read_until_deadline(prompt, started)
        } else {
            self.read_line(started)
        }
    }

    fn round_started(&mut self, round: u32) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "Round {}", round)?;
        writeln!(self.out, "{}", RULE)
    }

    fn move_settled(&mut self, outcome: &MoveOutcome) -> io::Result<()> {
        match (&outcome.word, outcome.verdict.is_valid()) {
            (Some(word), true) => writeln!(
                self.out,
                "{} plays '{}' ({})",
                outcome.player_name,
                word.as_str().green(),
                format!("-{} HP to seat {}", outcome.damage, opponent(outcome.seat) + 1).green()
            )?,
            _ => writeln!(
                self.out,
                "{} misses: {} ({})",
                outcome.player_name,
                outcome.verdict.message(),
                format!("-{} HP", outcome.damage).red()
            )?,
        }

        if let Some(hint) = &outcome.hint {
            writeln!(self.out, "Longest possible word: {}", hint.as_str().yellow())?;
        }
        Ok(())
    }

    fn round_finished(&mut self, report: &RoundReport) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Health:")?;
        for (name, health) in report.players.iter().zip(report.health) {
            writeln!(self.out, "{:10} {:>3} HP", name, health)?;
        }
        Ok(())
    }

    fn match_finished(&mut self, outcome: &MatchOutcome) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", RULE)?;
        match outcome {
            MatchOutcome::Winner { name, health, .. } => {
                writeln!(self.out, "Winner: {} ({} HP)", name.as_str().bold(), health)?
            }
            MatchOutcome::Draw { health } => {
                writeln!(self.out, "Draw ({} HP each)", health)?
            }
        }
        writeln!(self.out, "{}", RULE)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::player::Player;
    use crate::game::validation::MoveVerdict;
    use std::io::Cursor;
    use std::time::Duration;

    fn piped(input: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn printed(console: &TerminalConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }

    fn prompt(player: &Player) -> MovePrompt<'_> {
        MovePrompt {
            round: 1,
            player,
            reference: "chatons",
            time_budget: Duration::from_secs(15),
        }
    }

    #[test]
    fn test_piped_lines_become_submissions() {
        let player = Player::new("Player 1", 50);
        let mut console = piped("chaton\r\n  Chat \n");

        let first = console.read_move(&prompt(&player)).unwrap();
        assert_eq!(first.word.as_deref(), Some("chaton"));
        assert!(first.elapsed < Duration::from_secs(15));

        // Trimming and normalization are left to the arbitrator
        let second = console.read_move(&prompt(&player)).unwrap();
        assert_eq!(second.word.as_deref(), Some("  Chat "));

        let out = printed(&console);
        assert!(out.contains("Player 1"));
        assert!(out.contains("chatons"));
        assert!(out.contains("(15s)"));
    }

    #[test]
    fn test_end_of_input_is_no_word() {
        let player = Player::new("Player 1", 50);
        let mut console = piped("");
        let submission = console.read_move(&prompt(&player)).unwrap();
        assert_eq!(submission.word, None);
    }

    #[test]
    fn test_invalid_utf8_line_is_no_word() {
        let player = Player::new("Player 1", 50);
        let bytes = b"\xff\xfe\nchat\n".to_vec();
        let mut console = TerminalConsole::new(Cursor::new(bytes), Vec::new(), false);

        let garbled = console.read_move(&prompt(&player)).unwrap();
        assert_eq!(garbled.word, None);

        // The next line is still read normally
        let next = console.read_move(&prompt(&player)).unwrap();
        assert_eq!(next.word.as_deref(), Some("chat"));
    }

    #[test]
    fn test_move_lines() {
        let mut console = piped("");
        let valid = MoveOutcome {
            seat: 0,
            player_name: "Player 1".to_string(),
            reference: "chatons".to_string(),
            word: Some("chaton".to_string()),
            verdict: MoveVerdict::Valid,
            damaged_seat: 1,
            damage: 6,
            hint: Some("chat".to_string()),
        };
        let missed = MoveOutcome {
            seat: 1,
            player_name: "Player 2".to_string(),
            reference: "maisons".to_string(),
            word: Some("zzz".to_string()),
            verdict: MoveVerdict::NotInDictionary,
            damaged_seat: 1,
            damage: 7,
            hint: None,
        };
        console.move_settled(&valid).unwrap();
        console.move_settled(&missed).unwrap();

        let out = printed(&console);
        assert!(out.contains("Player 1 plays"));
        assert!(out.contains("-6 HP to seat 2"));
        assert!(out.contains("Longest possible word:"));
        assert!(out.contains("Player 2 misses: Not in dictionary"));
        assert!(out.contains("-7 HP"));
        assert_eq!(out.matches("Longest possible word").count(), 1);
    }

    #[test]
    fn test_round_and_match_lines() {
        let mut console = piped("");
        console.round_started(3).unwrap();
        console
            .round_finished(&RoundReport {
                round: 3,
                players: ["Player 1".to_string(), "Player 2".to_string()],
                references: ["chatons".to_string(), "maisons".to_string()],
                moves: Vec::new(),
                health: [38, -2],
            })
            .unwrap();
        console
            .match_finished(&MatchOutcome::Draw { health: 0 })
            .unwrap();

        let out = printed(&console);
        assert!(out.contains("Round 3"));
        assert!(out.contains("Player 1    38 HP"));
        assert!(out.contains("Player 2    -2 HP"));
        assert!(out.contains("Draw (0 HP each)"));
    }
}
