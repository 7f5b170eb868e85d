//! Game configuration and validation.

use crate::types::{
    GameKind, FOOD_REWARD, MAX_GRID_DIM, MAZE_MAX_HEALTH, MAZE_WALL_PERCENT, MIN_GRID_DIM,
    SNAKE_INITIAL_LENGTH,
};

/// Errors reported by [`GameConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{axis} {value} is outside {min}..={max}")]
    DimensionOutOfRange {
        axis: &'static str,
        value: u16,
        min: u16,
        max: u16,
    },
    #[error("snake of length {length} does not fit a grid {width} cells wide")]
    SnakeTooLong { length: u16, width: u16 },
    #[error("tick interval must be greater than zero")]
    ZeroTick,
    #[error("wall density {0}% must be below 100%")]
    InvalidWallDensity(u32),
}

/// Snake rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeConfig {
    pub initial_length: u16,
    pub food_reward: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            initial_length: SNAKE_INITIAL_LENGTH,
            food_reward: FOOD_REWARD,
        }
    }
}

/// Maze generation rules. Item odds are percentages per open interior cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub wall_percent: u32,
    pub treasure_percent: u32,
    pub trap_percent: u32,
    pub potion_percent: u32,
    pub max_health: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            wall_percent: MAZE_WALL_PERCENT,
            treasure_percent: 10,
            trap_percent: 10,
            potion_percent: 5,
            max_health: MAZE_MAX_HEALTH,
        }
    }
}

/// Everything needed to build a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub kind: GameKind,
    pub width: u16,
    pub height: u16,
    pub seed: u32,
    pub tick_ms: u32,
    pub snake: SnakeConfig,
    pub maze: MazeConfig,
}

impl GameConfig {
    /// Defaults for `kind` with the given seed.
    pub fn new(kind: GameKind, seed: u32) -> Self {
        let (width, height) = kind.default_dimensions();
        Self {
            kind,
            width,
            height,
            seed,
            tick_ms: kind.default_tick_ms(),
            snake: SnakeConfig::default(),
            maze: MazeConfig::default(),
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_tick_ms(mut self, tick_ms: u32) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Reject settings the games would otherwise silently clamp.
    ///
    /// Tic-tac-toe always plays on a 3x3 board, so its dimensions are not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }

        match self.kind {
            GameKind::TicTacToe => Ok(()),
            GameKind::Snake => {
                check_dimension("width", self.width)?;
                check_dimension("height", self.height)?;
                // Head sits in the middle column with the body trailing left.
                if self.snake.initial_length == 0
                    || self.snake.initial_length > self.width / 2 + 1
                {
                    return Err(ConfigError::SnakeTooLong {
                        length: self.snake.initial_length,
                        width: self.width,
                    });
                }
                Ok(())
            }
            GameKind::Maze => {
                check_dimension("width", self.width)?;
                check_dimension("height", self.height)?;
                if self.maze.wall_percent >= 100 {
                    return Err(ConfigError::InvalidWallDensity(self.maze.wall_percent));
                }
                Ok(())
            }
        }
    }
}

fn check_dimension(axis: &'static str, value: u16) -> Result<(), ConfigError> {
    if !(MIN_GRID_DIM..=MAX_GRID_DIM).contains(&value) {
        return Err(ConfigError::DimensionOutOfRange {
            axis,
            value,
            min: MIN_GRID_DIM,
            max: MAX_GRID_DIM,
        });
    }
    Ok(())
}

/// Clamp a requested dimension into the accepted range.
pub(crate) fn clamp_dimension(value: u16) -> u16 {
    value.clamp(MIN_GRID_DIM, MAX_GRID_DIM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs_are_valid() {
        for kind in [GameKind::Snake, GameKind::TicTacToe, GameKind::Maze] {
            assert_eq!(GameConfig::new(kind, 1).validate(), Ok(()));
        }
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let config = GameConfig::new(GameKind::Snake, 1).with_size(2, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DimensionOutOfRange {
                axis: "width",
                value: 2,
                min: MIN_GRID_DIM,
                max: MAX_GRID_DIM,
            })
        );
    }

    #[test]
    fn test_rejects_snake_longer_than_half_width() {
        let mut config = GameConfig::new(GameKind::Snake, 1).with_size(6, 6);
        config.snake.initial_length = 5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SnakeTooLong { length: 5, width: 6 })
        ));
        config.snake.initial_length = 4;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_tick_and_solid_maze() {
        let config = GameConfig::new(GameKind::TicTacToe, 1).with_tick_ms(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTick));

        let mut maze = GameConfig::new(GameKind::Maze, 1);
        maze.maze.wall_percent = 100;
        assert_eq!(maze.validate(), Err(ConfigError::InvalidWallDensity(100)));
    }

    #[test]
    fn test_tictactoe_ignores_dimensions() {
        let config = GameConfig::new(GameKind::TicTacToe, 1).with_size(0, 0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::ZeroTick.to_string(),
            "tick interval must be greater than zero"
        );
        assert_eq!(
            ConfigError::InvalidWallDensity(120).to_string(),
            "wall density 120% must be below 100%"
        );
    }
}
