//! Terminal grid arcade (default binary).
//!
//! Parses the command line, sets up logging, then runs one session of the
//! chosen game in the alternate screen until the player quits.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use grid_arcade::core::GameConfig;
use grid_arcade::engine::{GridGameEngine, Session, SessionConfig, SessionSummary};
use grid_arcade::input::TerminalInput;
use grid_arcade::term::TerminalFrontend;
use grid_arcade::types::GameKind;

/// Play snake, tic-tac-toe or a maze in the terminal.
#[derive(Debug, Parser)]
#[command(name = "grid-arcade", version, about)]
struct Cli {
    /// Game to play: snake, tictactoe or maze
    #[arg(value_parser = parse_game)]
    game: GameKind,

    /// Grid width in cells (ignored by tic-tac-toe)
    #[arg(long, env = "GRID_ARCADE_WIDTH")]
    width: Option<u16>,

    /// Grid height in cells (ignored by tic-tac-toe)
    #[arg(long, env = "GRID_ARCADE_HEIGHT")]
    height: Option<u16>,

    /// Seed for food and maze generation [default: derived from the clock]
    #[arg(long, env = "GRID_ARCADE_SEED")]
    seed: Option<u32>,

    /// Milliseconds between ticks [default: 150 for snake, 50 otherwise]
    #[arg(long, env = "GRID_ARCADE_TICK_MS")]
    tick_ms: Option<u32>,

    /// Write logs to this file (logging is off without it)
    #[arg(long, env = "GRID_ARCADE_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "GRID_ARCADE_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let mut config = GameConfig::new(self.game, self.seed.unwrap_or_else(clock_seed));
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        config
    }
}

fn parse_game(s: &str) -> Result<GameKind, String> {
    GameKind::from_str(s).ok_or_else(|| format!("unknown game '{}' (snake, tictactoe, maze)", s))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// The terminal belongs to the renderer, so logs only go to a file.
fn init_tracing(level: &str, log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_file.as_deref())?;

    let config = cli.game_config();
    config.validate().context("invalid game configuration")?;
    info!(
        game = config.kind.as_str(),
        width = config.width,
        height = config.height,
        seed = config.seed,
        tick_ms = config.tick_ms,
        "starting"
    );

    let mut frontend = TerminalFrontend::new(config.kind);
    let result = frontend.enter().and_then(|()| run(&config, &mut frontend));

    // Always try to restore terminal state.
    let restored = frontend.exit();
    let summary = result?;
    restored?;

    println!(
        "{}: {} round(s), {} won, {} lost, {} drawn, best score {}",
        config.kind.as_str(),
        summary.rounds,
        summary.wins,
        summary.losses,
        summary.draws,
        summary.best_score
    );
    Ok(())
}

fn run(config: &GameConfig, frontend: &mut TerminalFrontend) -> Result<SessionSummary> {
    let engine = GridGameEngine::from_config(config);
    let mut session = Session::new(engine, SessionConfig::from_game_config(config));
    session.run(&mut TerminalInput::new(), frontend)
}
