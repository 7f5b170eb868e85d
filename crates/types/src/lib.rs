//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by every game in the arcade.
//! All types are plain data with no external dependencies, so they can be used
//! from the game core, the terminal view and the input mapping alike.
//!
//! # Coordinates
//!
//! Grids are indexed by `(x, y)` with `x` growing to the right and `y` growing
//! downwards. `(0, 0)` is the top-left cell. Coordinates are signed so that a
//! candidate position one step outside the field is representable and can be
//! rejected by a bounds check.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SNAKE_TICK_MS` | 150 | Snake advances once per tick |
//! | `TURN_TICK_MS` | 50 | Turn-based games poll input at this rate |
//!
//! # Examples
//!
//! ```
//! use grid_arcade_types::{Coord, Direction, GameStatus, PlayerId};
//!
//! let head = Coord::new(2, 2);
//! assert_eq!(head.step(Direction::Up), Coord::new(2, 1));
//! assert!(Direction::Left.is_opposite(Direction::Right));
//!
//! assert!(GameStatus::Won(PlayerId::One).is_terminal());
//! assert!(!GameStatus::Paused.is_terminal());
//! ```

/// Smallest accepted grid dimension (snake and maze).
pub const MIN_GRID_DIM: u16 = 5;

/// Largest accepted grid dimension (snake and maze).
pub const MAX_GRID_DIM: u16 = 64;

/// Tic-tac-toe board side length.
pub const TICTACTOE_SIZE: u16 = 3;

/// Default snake field width.
pub const SNAKE_DEFAULT_WIDTH: u16 = 20;

/// Default snake field height.
pub const SNAKE_DEFAULT_HEIGHT: u16 = 15;

/// Default snake length at the start of a round.
pub const SNAKE_INITIAL_LENGTH: u16 = 3;

/// Score awarded per food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Default maze width (matches the classic 15x10 layout).
pub const MAZE_DEFAULT_WIDTH: u16 = 15;

/// Default maze height.
pub const MAZE_DEFAULT_HEIGHT: u16 = 10;

/// Walker health at the start of a maze round.
pub const MAZE_MAX_HEALTH: u32 = 100;

/// Probability (percent) that an interior maze cell becomes a wall.
pub const MAZE_WALL_PERCENT: u32 = 20;

/// Maze generation re-rolls before a corridor is carved.
pub const MAZE_GENERATION_ATTEMPTS: u32 = 16;

/// Snake tick interval in milliseconds.
pub const SNAKE_TICK_MS: u32 = 150;

/// Tick interval for the turn-based games in milliseconds.
pub const TURN_TICK_MS: u32 = 50;

/// A cell position on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`.
    pub fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// The neighbouring coordinate in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

/// Movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the `(dx, dy)` for one step in this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_arcade_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True if turning from `self` to `other` is a 180° turn.
    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A participant that can own cells.
///
/// Tic-tac-toe uses both ids (`One` plays X and moves first). The snake and the
/// maze walker are always `One`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Board mark for this player.
    ///
    /// ```
    /// use grid_arcade_types::PlayerId;
    ///
    /// assert_eq!(PlayerId::One.mark(), 'X');
    /// assert_eq!(PlayerId::Two.mark(), 'O');
    /// ```
    pub fn mark(self) -> char {
        match self {
            PlayerId::One => 'X',
            PlayerId::Two => 'O',
        }
    }
}

/// Pickups scattered through a maze.
///
/// Each variant carries its own magnitude; the maze applies it when the
/// walker steps on the cell and then removes the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MazeItem {
    /// Adds `value` to the score.
    Treasure { value: u32 },
    /// Removes `damage` health (saturating at zero).
    Trap { damage: u32 },
    /// Restores `heal` health (capped at the maximum).
    Potion { heal: u32 },
}

impl MazeItem {
    pub fn as_str(&self) -> &'static str {
        match self {
            MazeItem::Treasure { .. } => "treasure",
            MazeItem::Trap { .. } => "trap",
            MazeItem::Potion { .. } => "potion",
        }
    }
}

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    /// Snake body segment or a tic-tac-toe mark.
    Occupied(PlayerId),
    Food,
    Wall,
    /// Maze exit.
    Exit,
    Item(MazeItem),
}

impl CellState {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }
}

/// Lifecycle status of a round.
///
/// Transitions are one-directional: once `Won`, `Lost` or `Draw` is reached
/// only a reset returns the game to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Paused,
    Won(PlayerId),
    Lost,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Lost | GameStatus::Draw)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::Won(_) => "won",
            GameStatus::Lost => "lost",
            GameStatus::Draw => "draw",
        }
    }
}

/// Pending input recorded for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Turn the snake, move a cursor or step the maze walker.
    Steer(Direction),
    /// Place a mark under the cursor (tic-tac-toe only).
    Commit,
    /// Toggle between running and paused.
    TogglePause,
}

/// The games available in the arcade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Snake,
    TicTacToe,
    Maze,
}

impl GameKind {
    /// Parse a game name (case-insensitive).
    ///
    /// ```
    /// use grid_arcade_types::GameKind;
    ///
    /// assert_eq!(GameKind::from_str("Snake"), Some(GameKind::Snake));
    /// assert_eq!(GameKind::from_str("tic-tac-toe"), Some(GameKind::TicTacToe));
    /// assert_eq!(GameKind::from_str("pong"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "snake" => Some(GameKind::Snake),
            "tictactoe" | "tic-tac-toe" | "ttt" => Some(GameKind::TicTacToe),
            "maze" => Some(GameKind::Maze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Snake => "snake",
            GameKind::TicTacToe => "tictactoe",
            GameKind::Maze => "maze",
        }
    }

    /// Default `(width, height)` for a fresh round.
    pub fn default_dimensions(&self) -> (u16, u16) {
        match self {
            GameKind::Snake => (SNAKE_DEFAULT_WIDTH, SNAKE_DEFAULT_HEIGHT),
            GameKind::TicTacToe => (TICTACTOE_SIZE, TICTACTOE_SIZE),
            GameKind::Maze => (MAZE_DEFAULT_WIDTH, MAZE_DEFAULT_HEIGHT),
        }
    }

    /// Default tick interval in milliseconds.
    pub fn default_tick_ms(&self) -> u32 {
        match self {
            GameKind::Snake => SNAKE_TICK_MS,
            GameKind::TicTacToe | GameKind::Maze => TURN_TICK_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_layout_defaults() {
        assert_eq!(MAZE_DEFAULT_WIDTH, 15);
        assert_eq!(MAZE_DEFAULT_HEIGHT, 10);
        assert_eq!(MAZE_MAX_HEALTH, 100);
        assert_eq!(TICTACTOE_SIZE, 3);
        assert!(MIN_GRID_DIM <= MAZE_DEFAULT_HEIGHT);
        assert!(SNAKE_DEFAULT_WIDTH <= MAX_GRID_DIM);
    }
}
