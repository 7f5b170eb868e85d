//! Core game logic - pure, deterministic, and testable
//!
//! Every game here is an in-memory state machine behind the [`GridGame`]
//! trait. There is no terminal, no clock and no I/O in this crate, which makes
//! the games:
//!
//! - **Deterministic**: the same seed and intents produce the same round
//! - **Testable**: rules are exercised directly, tick by tick
//! - **Portable**: any driver can advance them at its own cadence
//!
//! # Module Structure
//!
//! - [`grid`]: bounded cell field with bounds-checked access
//! - [`game`]: the [`GridGame`] trait and shared pause handling
//! - [`snake`]: a growing snake chasing food
//! - [`tictactoe`]: two players on a 3x3 board
//! - [`maze`]: a walker escaping a maze with treasure, traps and potions
//! - [`config`]: validated game configuration
//! - [`rng`]: seeded LCG used for food and maze generation
//! - [`snapshot`]: detached copies of game state for rendering
//!
//! # Intents and ticks
//!
//! Input never mutates a game directly. [`GridGame::set_intent`] records what
//! the player wants; [`GridGame::tick`] applies it once. A later intent of
//! the same kind replaces an earlier one, so a burst of keys between two ticks
//! collapses into the last meaningful one.
//!
//! # Example
//!
//! ```
//! use grid_arcade_core::{GridGame, SnakeGame};
//! use grid_arcade_types::{Direction, GameStatus, Intent};
//!
//! let mut game = SnakeGame::new(10, 10, 12345);
//! game.set_intent(Intent::Steer(Direction::Down));
//! assert_eq!(game.tick(), GameStatus::Running);
//! assert_eq!(game.heading(), Direction::Down);
//! ```

pub mod config;
pub mod game;
pub mod grid;
pub mod maze;
pub mod rng;
pub mod snake;
pub mod snapshot;
pub mod tictactoe;

pub use grid_arcade_types as types;

pub use config::{ConfigError, GameConfig, MazeConfig, SnakeConfig};
pub use game::GridGame;
pub use grid::Grid;
pub use maze::MazeGame;
pub use rng::SimpleRng;
pub use snake::SnakeGame;
pub use snapshot::GridSnapshot;
pub use tictactoe::TicTacToe;
