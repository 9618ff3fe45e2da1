use chrono::Local;
use common::games::{
    GameConfig, GameMode, GameSessionEngine, Outcome, PiMode, SequenceSession, SessionEvent, SessionRng,
};
use common::log;
use common::platform::{Haptics, MusicTrack, PulseStyle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::app::App;
use crate::commands::print_pi_digits;
use crate::input::{InputAction, help_text, parse_line};
use crate::render::{Screen, paint};
use crate::terminal::TerminalBell;

/// Plays one game in the terminal until the player quits or stdin closes.
pub async fn run_game(app: &mut App, config: GameConfig, seed: Option<u64>) -> Result<(), String> {
    if config.mode == GameMode::Pi && config.pi_mode_or_default() == PiMode::Learn {
        print_pi_digits(None);
        return Ok(());
    }

    let rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let session = SequenceSession::new(config, rng).map_err(|e| e.to_string())?;
    let key = session.score_key();
    let cell_count = config.grid_size.cell_count();

    let colors = app.settings.colors();
    let best = app.scores.best(key).await;
    println!(
        "{} - {}, best {}",
        paint("Sequence Master", colors.background.start),
        key,
        best
    );
    println!("{}", help_text(config.mode));

    let music = app
        .audio
        .acquire(MusicTrack::for_mode(config.mode), app.settings.music_enabled());
    let haptics = Haptics::new(TerminalBell, app.settings.haptics_enabled());
    let mut screen = Screen::new(&config, colors);

    let (event_tx, mut events) = mpsc::unbounded_channel();
    let handle = GameSessionEngine::new(session, event_tx, app.scores.clone()).spawn();
    let started = Local::now();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    'game: loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    log!("Session engine stopped unexpectedly");
                    break;
                };
                match &event {
                    SessionEvent::InputAccepted { .. } => haptics.pulse(PulseStyle::Light),
                    SessionEvent::Finished { outcome: Outcome::Correct, .. } => haptics.pulse(PulseStyle::Success),
                    SessionEvent::Finished { .. } => haptics.pulse(PulseStyle::Error),
                    _ => {}
                }
                if let Some(text) = screen.render(&event) {
                    println!("{}", text);
                }
            }
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        log!("Failed to read input: {}", e);
                        break;
                    }
                };
                for action in parse_line(&line, config.mode, cell_count) {
                    match action {
                        InputAction::Engine(command) => {
                            if handle.send(command).is_err() {
                                break 'game;
                            }
                        }
                        InputAction::ToggleMusic => {
                            let enabled = app.settings.toggle_music();
                            app.audio.set_enabled(enabled);
                            println!("Music {}", if enabled { "on" } else { "off" });
                        }
                        InputAction::Help => println!("{}", help_text(config.mode)),
                        InputAction::Quit => break 'game,
                        InputAction::Invalid(token) => println!("? {}", token),
                    }
                }
            }
        }
    }

    let summary = handle.shutdown().await.map_err(|e| e.to_string())?;
    drop(music);

    let minutes = (Local::now() - started).num_minutes();
    println!(
        "{}: {} rounds, best this session {}, reached level {} ({} min)",
        summary.key, summary.rounds, summary.best_score, summary.highest_level, minutes
    );
    Ok(())
}

