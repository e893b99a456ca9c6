//! Terminal front end: line prompts and deadline-enforced input

mod console;
mod terminal;

pub use console::TerminalConsole;
