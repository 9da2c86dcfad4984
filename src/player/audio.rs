//! Audio feedback adapter for the terminal.

use std::io::{self, Write};

use crate::surface::AudioFeedback;

/// Rings the terminal bell on a wrong answer; a right answer stays quiet.
pub struct TerminalBell;

impl AudioFeedback for TerminalBell {
    fn signal_correct(&mut self) {
        log::debug!("audio: correct");
    }

    fn signal_incorrect(&mut self) {
        log::debug!("audio: incorrect");
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}
