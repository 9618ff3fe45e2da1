mod app;
mod commands;
mod config;
mod input;
mod render;
mod runner;
mod terminal;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use common::games::{Difficulty, GameConfigPatch, GameMode, GridSize, PiMode};
use common::platform::{UnsupportedLeaderboard, UnsupportedPurchases};
use common::settings::Theme;
use common::{log, logger, warn};

use app::App;
use config::{Config, get_config_manager};
use terminal::StdoutShareSheet;

#[derive(Parser)]
#[command(name = "sequence_master", about = "Memory training with colors, numbers and the digits of π")]
struct Args {
    /// YAML config file; defaults to the one next to the executable
    #[arg(long)]
    config: Option<String>,

    /// Overrides the storage file from the config
    #[arg(long)]
    storage: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Args, Default)]
struct GameArgs {
    #[arg(long)]
    mode: Option<GameMode>,

    #[arg(long)]
    pi_mode: Option<PiMode>,

    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    grid: Option<GridSize>,
}

impl GameArgs {
    fn patch(&self) -> GameConfigPatch {
        GameConfigPatch {
            mode: self.mode,
            pi_mode: self.pi_mode,
            difficulty: self.difficulty,
            grid_size: self.grid,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Play a game (the default)
    Play {
        #[command(flatten)]
        game: GameArgs,

        /// Fixed seed for a reproducible sequence
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show best scores
    Scores,
    /// Reset all best scores to zero
    ResetScores,
    /// Show or change preferences
    Settings {
        #[arg(long)]
        theme: Option<Theme>,

        #[arg(long)]
        toggle_music: bool,

        #[arg(long)]
        toggle_haptics: bool,
    },
    /// Print digits of π in blocks of ten
    PiDigits {
        #[arg(long)]
        count: Option<usize>,
    },
    /// Share the best score of a game configuration
    Share {
        #[command(flatten)]
        game: GameArgs,

        /// Phrase it as a challenge
        #[arg(long)]
        challenge: bool,
    },
    RemoveAds,
    RestorePurchases,
    Leaderboard {
        #[arg(long)]
        mode: Option<GameMode>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (config, config_error) = match get_config_manager(args.config.as_deref()).get_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("SequenceMaster".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);
    if let Some(e) = config_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    let mut app = App::open(&config, args.storage);

    match args.command.unwrap_or(Command::Play {
        game: GameArgs::default(),
        seed: None,
    }) {
        Command::Play { game, seed } => {
            app.settings.update_game_config(game.patch());
            let game_config = app.settings.game_config();
            log!("Starting {} ({})", game_config.mode, game_config.difficulty);
            runner::run_game(&mut app, game_config, seed).await?;
        }
        Command::Scores => commands::show_scores(&app).await,
        Command::ResetScores => commands::reset_scores(&app).await,
        Command::Settings {
            theme,
            toggle_music,
            toggle_haptics,
        } => commands::update_settings(&mut app, theme, toggle_music, toggle_haptics),
        Command::PiDigits { count } => commands::print_pi_digits(count),
        Command::Share { game, challenge } => {
            let game_config = app.settings.game_config().merged(game.patch());
            commands::share(&app, game_config, challenge, &StdoutShareSheet).await?;
        }
        Command::RemoveAds => commands::remove_ads(&mut app, &mut UnsupportedPurchases),
        Command::RestorePurchases => commands::restore_purchases(&mut app, &mut UnsupportedPurchases),
        Command::Leaderboard { mode } => {
            commands::leaderboard(&app, mode, &mut UnsupportedLeaderboard).await
        }
    }

    Ok(())
}
