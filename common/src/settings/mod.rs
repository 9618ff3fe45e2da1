mod settings;
mod settings_store;
mod theme;

pub use settings::Settings;
pub use settings_store::{LoadState, SettingsStore};
pub use theme::{BackgroundColors, ButtonColors, DigitColors, TextColors, Theme, ThemeColors};
