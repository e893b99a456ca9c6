//! Raw mode setup and restoration

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Keeps the terminal in raw mode while alive
pub struct RawMode {
    _private: (),
}

impl RawMode {
    /// Enter raw mode: keys arrive one by one, nothing is echoed
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
