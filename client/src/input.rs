use common::games::{EngineCommand, GameMode};

/// What one line typed during a game asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Engine(EngineCommand),
    ToggleMusic,
    Help,
    Quit,
    Invalid(String),
}

/// Parses a line of player input.
///
/// π mode takes digits, as many per line as typed. Grid modes take 1-based
/// cell numbers separated by spaces.
pub fn parse_line(line: &str, mode: GameMode, cell_count: u8) -> Vec<InputAction> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Vec::new(),
        "b" | "back" => return vec![InputAction::Engine(EngineCommand::Backspace)],
        "f" | "finish" => return vec![InputAction::Engine(EngineCommand::FinishRun)],
        "n" | "next" => return vec![InputAction::Engine(EngineCommand::NextLevel)],
        "r" | "restart" => return vec![InputAction::Engine(EngineCommand::Restart)],
        "m" | "music" => return vec![InputAction::ToggleMusic],
        "h" | "help" | "?" => return vec![InputAction::Help],
        "q" | "quit" | "exit" => return vec![InputAction::Quit],
        _ => {}
    }

    match mode {
        GameMode::Pi => line
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '.')
            .map(|c| match c.to_digit(10) {
                Some(d) => InputAction::Engine(EngineCommand::Press(d as u8)),
                None => InputAction::Invalid(c.to_string()),
            })
            .collect(),
        GameMode::Colors | GameMode::Numbers => line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| match token.parse::<u8>() {
                Ok(cell) if (1..=cell_count).contains(&cell) => {
                    InputAction::Engine(EngineCommand::Press(cell - 1))
                }
                _ => InputAction::Invalid(token.to_string()),
            })
            .collect(),
    }
}

pub fn help_text(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Pi => "Type digits of π (e.g. 3141). b: undo, f: bank a free run, n: next run, r: restart, m: music, q: quit",
        GameMode::Colors | GameMode::Numbers => {
            "Type cell numbers separated by spaces (e.g. 1 5 2). b: undo, r: restart, m: music, q: quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(element: u8) -> InputAction {
        InputAction::Engine(EngineCommand::Press(element))
    }

    #[test]
    fn test_pi_digits_split_per_character() {
        assert_eq!(
            parse_line("3.14", GameMode::Pi, 9),
            vec![press(3), press(1), press(4)]
        );
        assert_eq!(
            parse_line("1x", GameMode::Pi, 9),
            vec![press(1), InputAction::Invalid("x".to_string())]
        );
    }

    #[test]
    fn test_grid_cells_are_one_based() {
        assert_eq!(
            parse_line("1 4, 9", GameMode::Colors, 9),
            vec![press(0), press(3), press(8)]
        );
        assert_eq!(
            parse_line("0 5", GameMode::Numbers, 4),
            vec![
                InputAction::Invalid("0".to_string()),
                InputAction::Invalid("5".to_string())
            ]
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            parse_line(" Back ", GameMode::Pi, 9),
            vec![InputAction::Engine(EngineCommand::Backspace)]
        );
        assert_eq!(parse_line("q", GameMode::Colors, 4), vec![InputAction::Quit]);
        assert_eq!(parse_line("m", GameMode::Colors, 4), vec![InputAction::ToggleMusic]);
        assert!(parse_line("   ", GameMode::Pi, 9).is_empty());
    }
}
