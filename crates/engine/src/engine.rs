//! One enum over every playable game.

use tracing::debug;

use crate::core::{GameConfig, GridGame, GridSnapshot, MazeGame, SnakeGame, TicTacToe};
use crate::types::{GameKind, GameStatus, Intent};

/// The game a session plays, chosen at startup.
#[derive(Debug, Clone)]
pub enum GridGameEngine {
    Snake(SnakeGame),
    TicTacToe(TicTacToe),
    Maze(MazeGame),
}

macro_rules! dispatch {
    ($engine:expr, $game:ident => $body:expr) => {
        match $engine {
            GridGameEngine::Snake($game) => $body,
            GridGameEngine::TicTacToe($game) => $body,
            GridGameEngine::Maze($game) => $body,
        }
    };
}

impl GridGameEngine {
    /// Build the game described by `config`. The config is not validated here;
    /// out-of-range dimensions are clamped by the game.
    pub fn from_config(config: &GameConfig) -> Self {
        debug!(
            kind = config.kind.as_str(),
            width = config.width,
            height = config.height,
            seed = config.seed,
            "building engine"
        );
        match config.kind {
            GameKind::Snake => GridGameEngine::Snake(SnakeGame::with_config(
                config.snake,
                config.width,
                config.height,
                config.seed,
            )),
            GameKind::TicTacToe => GridGameEngine::TicTacToe(TicTacToe::new()),
            GameKind::Maze => GridGameEngine::Maze(MazeGame::with_config(
                config.maze,
                config.width,
                config.height,
                config.seed,
            )),
        }
    }
}

impl GridGame for GridGameEngine {
    fn kind(&self) -> GameKind {
        dispatch!(self, game => game.kind())
    }

    fn reset(&mut self, width: u16, height: u16) {
        dispatch!(self, game => game.reset(width, height))
    }

    fn set_intent(&mut self, intent: Intent) {
        dispatch!(self, game => game.set_intent(intent))
    }

    fn tick(&mut self) -> GameStatus {
        dispatch!(self, game => game.tick())
    }

    fn status(&self) -> GameStatus {
        dispatch!(self, game => game.status())
    }

    fn score(&self) -> u32 {
        dispatch!(self, game => game.score())
    }

    fn snapshot_into(&self, out: &mut GridSnapshot) {
        dispatch!(self, game => game.snapshot_into(out))
    }
}
