use common::games::{GameConfig, GameMode, GridSize, pi};
use common::platform::{
    Achievement, Capability, ChallengeData, Leaderboard, PurchaseService, REMOVE_ADS_PRODUCT, ShareOutcome,
    ShareSheet,
};
use common::scores::{BestScores, ScoreKey};
use common::settings::Theme;

use crate::app::App;

const GROUPS_PER_ROW: usize = 5;

pub fn print_pi_digits(count: Option<usize>) {
    for row in pi_digit_rows(count) {
        println!("{}", row);
    }
}

/// Learn-mode layout: blocks of ten digits, numbered by their first position.
pub fn pi_digit_rows(count: Option<usize>) -> Vec<String> {
    let groups = pi::digit_groups(count);
    groups
        .chunks(GROUPS_PER_ROW)
        .enumerate()
        .map(|(row, chunk)| {
            let first = row * GROUPS_PER_ROW * pi::LEARN_GROUP_SIZE + 1;
            format!("{:>4}  {}", first, chunk.join(" "))
        })
        .collect()
}

pub fn format_scores(scores: &BestScores) -> String {
    let mut lines = Vec::new();
    for mode in [GameMode::Colors, GameMode::Numbers] {
        let cells: Vec<String> = GridSize::ALL
            .iter()
            .map(|&grid| {
                let key = match mode {
                    GameMode::Colors => ScoreKey::Colors(grid),
                    _ => ScoreKey::Numbers(grid),
                };
                format!("{} {}", grid, scores.get(key))
            })
            .collect();
        lines.push(format!("{:<8} {}", mode.as_str(), cells.join("  ")));
    }
    lines.push(format!("{:<8} {}", "pi", scores.get(ScoreKey::Pi)));
    lines.push(format!("{:<8} {}", "pi free", scores.get(ScoreKey::PiFree)));
    lines.join("\n")
}

pub async fn show_scores(app: &App) {
    println!("{}", format_scores(&app.scores.scores().await));
}

pub async fn reset_scores(app: &App) {
    app.scores.reset().await;
    println!("Best scores reset");
}

pub fn update_settings(app: &mut App, theme: Option<Theme>, toggle_music: bool, toggle_haptics: bool) {
    if let Some(theme) = theme {
        app.settings.update_theme(theme);
    }
    if toggle_music {
        app.settings.toggle_music();
    }
    if toggle_haptics {
        app.settings.toggle_haptics();
    }

    let settings = app.settings.settings();
    println!("theme:   {}", settings.theme);
    println!("music:   {}", on_off(settings.music_enabled));
    println!("haptics: {}", on_off(settings.haptics_enabled));
    println!("ads:     {}", if app.settings.ads_removed() { "removed" } else { "shown" });
}

pub async fn share(app: &App, config: GameConfig, challenge: bool, sheet: &impl ShareSheet) -> Result<(), String> {
    let key = ScoreKey::for_config(&config).map_err(|e| e.to_string())?;
    let data = ChallengeData::new(&config, app.scores.best(key).await);
    let message = if challenge {
        data.challenge_message()
    } else {
        data.score_message()
    };

    match sheet.share_text(&message) {
        ShareOutcome::Shared | ShareOutcome::Cancelled => Ok(()),
        ShareOutcome::Error(e) => Err(format!("Sharing failed: {}", e)),
    }
}

pub fn remove_ads(app: &mut App, store: &mut impl PurchaseService) {
    if let Capability::NotAvailable { message } = store.initialize() {
        println!("{}", message);
        return;
    }
    match store.purchase(REMOVE_ADS_PRODUCT) {
        Capability::Available(true) => {
            app.settings.set_ads_removed(true);
            println!("Ads removed");
        }
        Capability::Available(false) => println!("Purchase cancelled"),
        Capability::NotAvailable { message } => println!("{}", message),
    }
}

pub fn restore_purchases(app: &mut App, store: &mut impl PurchaseService) {
    match store.restore() {
        Capability::Available(products) => {
            let owned = products.iter().any(|p| p == REMOVE_ADS_PRODUCT);
            app.settings.set_ads_removed(owned);
            println!("Restored {} purchase(s)", products.len());
        }
        Capability::NotAvailable { message } => println!("{}", message),
    }
}

/// Submits the best score of each mode, unlocks earned achievements and opens the board.
pub async fn leaderboard(app: &App, mode: Option<GameMode>, board: &mut impl Leaderboard) {
    if let Capability::NotAvailable { message } = board.initialize() {
        println!("{}", message);
        return;
    }

    let scores = app.scores.scores().await;
    for mode in GameMode::ALL {
        let best = ScoreKey::all()
            .into_iter()
            .filter(|key| key.mode() == mode)
            .map(|key| scores.get(key))
            .max()
            .unwrap_or(0);
        if best > 0 {
            board.submit_score(mode, best);
        }
    }
    for achievement in Achievement::unlocked_by(&scores) {
        board.unlock(achievement);
    }
    if let Capability::NotAvailable { message } = board.show(mode) {
        println!("{}", message);
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pi_rows_number_first_digit() {
        let rows = pi_digit_rows(Some(60));
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("   1  3141592653 5897932384"));
        assert!(rows[1].starts_with("  51  "));
    }

    #[test]
    fn test_default_learn_count() {
        let rows = pi_digit_rows(None);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_format_scores() {
        let mut scores = BestScores::default();
        scores.raise(ScoreKey::Numbers(GridSize::Four), 8);
        scores.raise(ScoreKey::PiFree, 31);
        let text = format_scores(&scores);
        assert!(text.contains("numbers  2x2 0  3x3 0  4x4 8  5x5 0"));
        assert!(text.ends_with("pi free  31"));
    }
}
