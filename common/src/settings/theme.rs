use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Purple,
    Blue,
    Green,
    Orange,
    Pink,
    Red,
    Teal,
    Indigo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundColors {
    pub start: &'static str,
    pub end: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DigitColors {
    pub display: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonColors {
    pub primary: &'static str,
    pub primary_text: &'static str,
    pub secondary: &'static str,
    pub secondary_text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub background: BackgroundColors,
    pub digit: DigitColors,
    pub button: ButtonColors,
    pub text: TextColors,
}

const WHITE: &str = "#FFFFFF";
const TRANSLUCENT: &str = "rgba(255, 255, 255, 0.2)";
const SOFT_WHITE: &str = "rgba(255, 255, 255, 0.8)";
const EMERALD: &str = "#10B981";
const CRIMSON: &str = "#EF4444";

const fn palette(
    start: &'static str,
    end: &'static str,
    correct: &'static str,
    incorrect: &'static str,
) -> ThemeColors {
    ThemeColors {
        background: BackgroundColors { start, end },
        digit: DigitColors {
            display: WHITE,
            correct,
            incorrect,
        },
        button: ButtonColors {
            primary: WHITE,
            primary_text: start,
            secondary: TRANSLUCENT,
            secondary_text: WHITE,
        },
        text: TextColors {
            primary: WHITE,
            secondary: SOFT_WHITE,
        },
    }
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::Purple,
        Theme::Blue,
        Theme::Green,
        Theme::Orange,
        Theme::Pink,
        Theme::Red,
        Theme::Teal,
        Theme::Indigo,
    ];

    pub const DEFAULT: Theme = Theme::Orange;

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Purple => "purple",
            Theme::Blue => "blue",
            Theme::Green => "green",
            Theme::Orange => "orange",
            Theme::Pink => "pink",
            Theme::Red => "red",
            Theme::Teal => "teal",
            Theme::Indigo => "indigo",
        }
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Purple => palette("#9333EA", "#7C3AED", EMERALD, CRIMSON),
            Theme::Blue => palette("#0EA5E9", "#06B6D4", EMERALD, CRIMSON),
            Theme::Green => palette("#10B981", "#059669", "#34D399", CRIMSON),
            Theme::Orange => palette("#F97316", "#EA580C", EMERALD, CRIMSON),
            Theme::Pink => palette("#EC4899", "#DB2777", EMERALD, CRIMSON),
            // red background would swallow a red "wrong" marker
            Theme::Red => palette("#EF4444", "#DC2626", EMERALD, "#FCD34D"),
            Theme::Teal => palette("#14B8A6", "#0D9488", EMERALD, CRIMSON),
            Theme::Indigo => palette("#6366F1", "#4F46E5", EMERALD, CRIMSON),
        }
    }

    /// Palette for a stored theme name; unknown names get the default palette.
    pub fn colors_for(name: &str) -> ThemeColors {
        name.parse::<Theme>().unwrap_or(Theme::DEFAULT).colors()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == wanted)
            .ok_or_else(|| GameError::InvalidConfig {
                field: "theme",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_themes() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
        assert_eq!(" Teal ".parse::<Theme>().unwrap(), Theme::Teal);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_orange() {
        assert_eq!(Theme::colors_for("chartreuse"), Theme::Orange.colors());
        assert!("chartreuse".parse::<Theme>().is_err());
    }

    #[test]
    fn test_palette_values() {
        let orange = Theme::Orange.colors();
        assert_eq!(orange.background.start, "#F97316");
        assert_eq!(orange.button.primary_text, "#F97316");

        let red = Theme::Red.colors();
        assert_eq!(red.digit.incorrect, "#FCD34D");
        assert_eq!(Theme::Green.colors().digit.correct, "#34D399");
    }
}
