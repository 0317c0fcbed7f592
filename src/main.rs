use crate::config::Config;
use crate::ui::app::TrainerApp;
use crate::AppError::ConfigError;
use clap::Parser;
use frethero::player::DEFAULT_TEMPO_SECONDS;
use frethero::FretError as LibFretError;
use frethero::{load_library, select_chords, PlaybackCursor, Selection, ViewMode};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

mod config;
mod ui;

/// Chord library shipped with the binary, used when none is configured.
const DEFAULT_LIBRARY: &str = include_str!("../presets/chords.yaml");

fn main() {
    let result = main_result();
    std::process::exit(match result {
        Ok(()) => 0,
        Err(err) => {
            // use Display instead of Debug for user friendly error messages
            log::error!("{err}");
            1
        }
    });
}

pub fn main_result() -> Result<(), AppError> {
    // setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("frethero=info"))
        .init();

    // args
    let mut args = CliArgs::parse();
    let library_file = args.library_file.take().map(PathBuf::from);

    // check if library file exists
    if let Some(library_file) = &library_file {
        if !library_file.exists() {
            let err = ConfigError(format!("Library file not found {library_file:?}"));
            return Err(err);
        }
        log::info!("Starting with library file {library_file:?}");
    }

    // check tempo sanity before it reaches Duration
    if let Some(tempo_seconds) = args.tempo_seconds {
        if !tempo_seconds.is_finite() || tempo_seconds <= 0.0 {
            let err = ConfigError(format!("Tempo must be positive, got {tempo_seconds}"));
            return Err(err);
        }
    }

    // read local config and remember explicit choices for next time
    let mut local_config = Config::read_config()?;
    if library_file.is_some() {
        local_config.set_library_file(library_file.clone())?;
    }
    if args.tempo_seconds.is_some() {
        local_config.set_tempo_seconds(args.tempo_seconds)?;
    }

    // resolve the document: args, then config, then the built-in presets
    let document = match library_file.or_else(|| local_config.get_library_file()) {
        Some(path) if path.exists() => std::fs::read_to_string(path)?,
        Some(path) => {
            log::warn!("Remembered library file {path:?} is gone, using built-in presets");
            DEFAULT_LIBRARY.to_string()
        }
        None => DEFAULT_LIBRARY.to_string(),
    };
    let library = load_library(&document)?;

    // resolve the selection request
    let (selection, selection_label) = match &args.chords {
        Some(list) => {
            let names: Vec<String> = list
                .split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect();
            (Selection::ByNames(names), "custom".to_string())
        }
        None => (
            Selection::ByToken(args.selection.clone()),
            args.selection.clone(),
        ),
    };
    let names = select_chords(&library, &selection);
    if names.is_empty() {
        // empty means "no match", not a fault
        println!("no matching chords for selection '{selection_label}'");
        return Ok(());
    }
    log::info!("Practicing {} chords from '{selection_label}'", names.len());

    // bundle the session
    let tempo_seconds = args
        .tempo_seconds
        .or_else(|| local_config.get_tempo_seconds())
        .unwrap_or(DEFAULT_TEMPO_SECONDS);
    let mut cursor = PlaybackCursor::new(names, Duration::from_secs_f32(tempo_seconds));
    if args.timer {
        cursor.toggle_timer();
    }
    let mode = if args.full_neck {
        ViewMode::Full
    } else {
        ViewMode::Zoom
    };

    // go!
    let mut app = TrainerApp::new(library, cursor, mode, selection_label);
    app.run()?;
    Ok(())
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Optional path to a chord library file.
    #[arg(long)]
    library_file: Option<String>,
    /// Selection to practice: a set name, "all", "major" or "minor".
    #[arg(long, default_value = "all")]
    selection: String,
    /// Comma separated chord names, overrides --selection.
    #[arg(long)]
    chords: Option<String>,
    /// Start in the full neck view.
    #[arg(long, default_value_t = false)]
    full_neck: bool,
    /// Seconds between timed chord changes.
    #[arg(long)]
    tempo_seconds: Option<f32>,
    /// Start with the change timer enabled.
    #[arg(long, default_value_t = false)]
    timer: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("library error: {0}")]
    LibraryError(String),
    #[error("other error: {0}")]
    OtherError(String),
}

impl From<LibFretError> for AppError {
    fn from(error: LibFretError) -> Self {
        match error {
            LibFretError::ConfigError(s) => Self::ConfigError(s),
            LibFretError::SchemaError(s)
            | LibFretError::EncodingError(s)
            | LibFretError::ValidationError(s) => Self::LibraryError(s),
            LibFretError::IoError(s) => Self::OtherError(s),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::OtherError(error.to_string())
    }
}
