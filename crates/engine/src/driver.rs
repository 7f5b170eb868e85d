//! Fixed-cadence session loop.
//!
//! Each iteration presents the current frame, waits for at most one command
//! until the tick deadline, and advances the game once the deadline passes.
//! At most one intent is read per tick; later keys wait for the next tick.
//! Input and output are injected so the loop itself does no I/O.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::{GameConfig, GridGame, GridSnapshot};
use crate::engine::GridGameEngine;
use crate::types::{GameStatus, Intent};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forwarded to the game.
    Intent(Intent),
    /// Start a new round with the session dimensions.
    Reset,
    /// End the session.
    Quit,
}

impl From<Intent> for Command {
    fn from(intent: Intent) -> Self {
        Command::Intent(intent)
    }
}

/// Source of player commands.
pub trait InputPoll {
    /// Wait up to `timeout` for a command. `Ok(None)` means nothing arrived.
    fn poll(&mut self, timeout: Duration) -> Result<Option<Command>>;
}

/// Destination for rendered frames.
pub trait FrameSink {
    fn present(&mut self, snap: &GridSnapshot) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub tick: Duration,
    pub width: u16,
    pub height: u16,
}

impl SessionConfig {
    pub fn from_game_config(config: &GameConfig) -> Self {
        Self {
            tick: Duration::from_millis(u64::from(config.tick_ms)),
            width: config.width,
            height: config.height,
        }
    }
}

/// Totals for one session, kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub best_score: u32,
    /// Ticks delivered to the game, paused or not.
    pub ticks: u64,
}

pub struct Session {
    engine: GridGameEngine,
    config: SessionConfig,
    snapshot: GridSnapshot,
    summary: SessionSummary,
    /// Whether the current round's outcome has been counted.
    round_settled: bool,
}

impl Session {
    pub fn new(engine: GridGameEngine, config: SessionConfig) -> Self {
        Self {
            engine,
            config,
            snapshot: GridSnapshot::default(),
            summary: SessionSummary {
                rounds: 1,
                ..SessionSummary::default()
            },
            round_settled: false,
        }
    }

    pub fn engine(&self) -> &GridGameEngine {
        &self.engine
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Run until the input source sends [`Command::Quit`].
    pub fn run<I, S>(&mut self, input: &mut I, sink: &mut S) -> Result<SessionSummary>
    where
        I: InputPoll + ?Sized,
        S: FrameSink + ?Sized,
    {
        info!(
            kind = self.engine.kind().as_str(),
            tick_ms = self.config.tick.as_millis() as u64,
            "session started"
        );
        let mut last_tick = Instant::now();
        let mut intent_queued = false;

        loop {
            self.engine.snapshot_into(&mut self.snapshot);
            sink.present(&self.snapshot).context("failed to present frame")?;

            let timeout = self.config.tick.saturating_sub(last_tick.elapsed());
            if intent_queued {
                // Games hold a single pending intent; further keys stay unread
                // until the tick has consumed this one.
                thread::sleep(timeout);
            } else {
                match input.poll(timeout).context("failed to poll input")? {
                    Some(Command::Quit) => break,
                    Some(Command::Reset) => self.new_round(),
                    Some(Command::Intent(intent)) => {
                        self.engine.set_intent(intent);
                        intent_queued = true;
                    }
                    None => {}
                }
            }

            if last_tick.elapsed() >= self.config.tick {
                last_tick = Instant::now();
                intent_queued = false;
                let status = self.engine.tick();
                self.summary.ticks += 1;
                self.settle(status);
            }
        }

        info!(
            rounds = self.summary.rounds,
            wins = self.summary.wins,
            losses = self.summary.losses,
            draws = self.summary.draws,
            best_score = self.summary.best_score,
            "session ended"
        );
        Ok(self.summary)
    }

    fn new_round(&mut self) {
        self.engine.reset(self.config.width, self.config.height);
        self.summary.rounds += 1;
        self.round_settled = false;
        debug!(round = self.summary.rounds, "round reset");
    }

    /// Count a finished round once.
    fn settle(&mut self, status: GameStatus) {
        self.summary.best_score = self.summary.best_score.max(self.engine.score());
        if self.round_settled || !status.is_terminal() {
            return;
        }
        self.round_settled = true;
        match status {
            GameStatus::Won(_) => self.summary.wins += 1,
            GameStatus::Lost => self.summary.losses += 1,
            GameStatus::Draw => self.summary.draws += 1,
            GameStatus::Running | GameStatus::Paused => {}
        }
        info!(
            round = self.summary.rounds,
            status = status.as_str(),
            score = self.engine.score(),
            "round finished"
        );
    }
}
