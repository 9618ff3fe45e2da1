use std::io::Write;

use common::platform::{HapticPulse, PulseStyle, ShareOutcome, ShareSheet};

/// Rings the terminal bell on errors; a terminal has nothing finer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl HapticPulse for TerminalBell {
    fn pulse(&self, style: PulseStyle) {
        if style == PulseStyle::Error {
            let mut stdout = std::io::stdout();
            let _ = stdout.write_all(b"\x07");
            let _ = stdout.flush();
        }
    }
}

/// Prints the message so it can be copied.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutShareSheet;

impl ShareSheet for StdoutShareSheet {
    fn share_text(&self, message: &str) -> ShareOutcome {
        let mut stdout = std::io::stdout();
        match writeln!(stdout, "{}", message) {
            Ok(()) => ShareOutcome::Shared,
            Err(e) => ShareOutcome::Error(e.to_string()),
        }
    }
}
