use common::games::{GameConfig, GameMode, Outcome, PiMode, SessionEvent};
use common::settings::ThemeColors;

/// Turns session events into terminal text for one game.
pub struct Screen {
    mode: GameMode,
    free_typing: bool,
    side: u8,
    colors: ThemeColors,
    entered: Vec<u8>,
}

impl Screen {
    pub fn new(config: &GameConfig, colors: ThemeColors) -> Self {
        Self {
            mode: config.mode,
            free_typing: config.mode == GameMode::Pi && config.pi_mode_or_default() == PiMode::Free,
            side: config.grid_size.side(),
            colors,
            entered: Vec::new(),
        }
    }

    pub fn render(&mut self, event: &SessionEvent) -> Option<String> {
        match event {
            SessionEvent::LevelStarted { level, .. } => {
                self.entered.clear();
                let header = if self.free_typing {
                    format!("Run {}", level)
                } else {
                    format!("Level {}: watch closely", level)
                };
                Some(paint(&header, self.colors.background.start))
            }
            SessionEvent::Highlight { position, element } => Some(match self.mode {
                GameMode::Pi => format!("  #{}  {}", position + 1, element),
                GameMode::Colors | GameMode::Numbers => self.grid(Some(*element)),
            }),
            SessionEvent::HighlightCleared { .. } => None,
            SessionEvent::InputOpened { expected } => Some(if self.free_typing {
                "Type as many digits of π as you can".to_string()
            } else {
                format!("Your turn: repeat {} {}", expected, self.unit(*expected))
            }),
            SessionEvent::InputAccepted { element, progress } => {
                self.entered.push(*element);
                self.entered.truncate(*progress);
                Some(self.entered_line())
            }
            SessionEvent::InputRemoved { progress } => {
                self.entered.truncate(*progress);
                Some(self.entered_line())
            }
            SessionEvent::Rejected { reason } => Some(format!("! {}", reason)),
            SessionEvent::Finished {
                outcome,
                score,
                new_record,
                auto_advance,
                ..
            } => Some(self.result(*outcome, *score, *new_record, *auto_advance)),
            SessionEvent::Completed { level } => Some(format!(
                "{}\nr: restart, q: quit",
                paint(&format!("All {} digits recalled!", level), self.colors.digit.correct)
            )),
        }
    }

    /// The grid with cell numbers; `highlighted` is drawn filled.
    pub fn grid(&self, highlighted: Option<u8>) -> String {
        let width = (self.side as usize * self.side as usize).to_string().len();
        let mut rows = Vec::with_capacity(self.side as usize);
        for row in 0..self.side {
            let cells: Vec<String> = (0..self.side)
                .map(|col| {
                    let cell = row * self.side + col;
                    if highlighted == Some(cell) {
                        format!("[{}]", "#".repeat(width))
                    } else {
                        format!("[{:>width$}]", cell + 1, width = width)
                    }
                })
                .collect();
            rows.push(cells.join(" "));
        }
        rows.join("\n")
    }

    fn unit(&self, count: usize) -> &'static str {
        match (self.mode, count) {
            (GameMode::Pi, 1) => "digit",
            (GameMode::Pi, _) => "digits",
            (_, 1) => "cell",
            _ => "cells",
        }
    }

    fn entered_line(&self) -> String {
        match self.mode {
            GameMode::Pi => format!("  {}", format_pi(&self.entered)),
            GameMode::Colors | GameMode::Numbers => {
                let cells: Vec<String> = self.entered.iter().map(|c| (c + 1).to_string()).collect();
                format!("  > {}", cells.join(" "))
            }
        }
    }

    fn result(&self, outcome: Outcome, score: u32, new_record: bool, auto_advance: bool) -> String {
        let mut text = match outcome {
            Outcome::Correct => paint("Correct!", self.colors.digit.correct),
            _ => paint("Wrong!", self.colors.digit.incorrect),
        };
        text.push_str(&format!(" Score: {}", score));
        if new_record {
            text.push_str(" - new record!");
        }
        let hint = if auto_advance {
            "Next level coming up..."
        } else if outcome == Outcome::Correct {
            "n: next run, r: restart, q: quit"
        } else {
            "r: play again, q: quit"
        };
        text.push('\n');
        text.push_str(hint);
        text
    }
}

/// π digits with the decimal point after the leading 3.
pub fn format_pi(digits: &[u8]) -> String {
    let mut text = String::with_capacity(digits.len() + 1);
    for (i, digit) in digits.iter().enumerate() {
        text.push(char::from(b'0' + digit));
        if i == 0 {
            text.push('.');
        }
    }
    text
}

/// Wraps `text` in a 24-bit foreground colour. Non-hex colours leave it plain.
pub fn paint(text: &str, color: &str) -> String {
    match hex_rgb(color) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
        None => text.to_string(),
    }
}

fn hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::{Difficulty, GridSize, Phase};
    use common::settings::Theme;

    fn screen(mode: GameMode, grid_size: GridSize) -> Screen {
        let config = GameConfig {
            mode,
            pi_mode: None,
            difficulty: Difficulty::Normal,
            grid_size,
        };
        Screen::new(&config, Theme::Orange.colors())
    }

    #[test]
    fn test_grid_highlights_one_cell() {
        let screen = screen(GameMode::Colors, GridSize::Two);
        assert_eq!(screen.grid(Some(2)), "[1] [2]\n[#] [4]");
        assert_eq!(screen.grid(None), "[1] [2]\n[3] [4]");
    }

    #[test]
    fn test_wide_grid_pads_numbers() {
        let screen = screen(GameMode::Numbers, GridSize::Four);
        let grid = screen.grid(Some(15));
        assert!(grid.starts_with("[ 1] [ 2]"));
        assert!(grid.ends_with("[##]"));
    }

    #[test]
    fn test_pi_input_echo() {
        let mut screen = screen(GameMode::Pi, GridSize::Three);
        screen.render(&SessionEvent::LevelStarted { level: 3, phase: Phase::Showing });
        screen.render(&SessionEvent::InputAccepted { element: 3, progress: 1 });
        screen.render(&SessionEvent::InputAccepted { element: 1, progress: 2 });
        assert_eq!(
            screen.render(&SessionEvent::InputAccepted { element: 4, progress: 3 }),
            Some("  3.14".to_string())
        );
        assert_eq!(
            screen.render(&SessionEvent::InputRemoved { progress: 1 }),
            Some("  3.".to_string())
        );
    }

    #[test]
    fn test_completed_offers_restart() {
        let mut screen = screen(GameMode::Pi, GridSize::Three);
        let text = screen.render(&SessionEvent::Completed { level: 301 }).unwrap();
        assert!(text.contains("All 301 digits recalled!"));
        assert!(text.ends_with("r: restart, q: quit"));
    }

    #[test]
    fn test_format_pi() {
        assert_eq!(format_pi(&[]), "");
        assert_eq!(format_pi(&[3, 1, 4, 1, 5]), "3.1415");
    }

    #[test]
    fn test_paint_ignores_rgba() {
        assert_eq!(paint("x", "rgba(255, 255, 255, 0.2)"), "x");
        assert_eq!(paint("x", "#FF0010"), "\x1b[38;2;255;0;16mx\x1b[0m");
    }
}
