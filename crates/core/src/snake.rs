//! Snake - a growing body advancing one cell per tick
//!
//! The body is stored head-first and mirrored into the grid as
//! `Occupied(PlayerId::One)` cells so collision checks are a single lookup.
//! Leaving the field or running into the body ends the round; eating food grows
//! the body by one and drops new food on a free cell.

use std::collections::VecDeque;

use tracing::{debug, info, trace};

use crate::config::{clamp_dimension, SnakeConfig};
use crate::game::{resolve_pause, GridGame};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snapshot::GridSnapshot;
use crate::types::{CellState, Coord, Direction, GameKind, GameStatus, Intent, PlayerId};

#[derive(Debug, Clone)]
pub struct SnakeGame {
    grid: Grid,
    /// Body segments, head at the front.
    body: VecDeque<Coord>,
    heading: Direction,
    pending_turn: Option<Direction>,
    pause_requested: bool,
    food: Option<Coord>,
    score: u32,
    status: GameStatus,
    ticks: u64,
    rules: SnakeConfig,
    rng: SimpleRng,
    /// Scratch buffer for free-cell sampling.
    free: Vec<Coord>,
}

impl SnakeGame {
    /// New round with default rules.
    pub fn new(width: u16, height: u16, seed: u32) -> Self {
        Self::with_config(SnakeConfig::default(), width, height, seed)
    }

    pub fn with_config(rules: SnakeConfig, width: u16, height: u16, seed: u32) -> Self {
        let mut game = Self {
            grid: Grid::new(0, 0),
            body: VecDeque::new(),
            heading: Direction::Right,
            pending_turn: None,
            pause_requested: false,
            food: None,
            score: 0,
            status: GameStatus::Running,
            ticks: 0,
            rules,
            rng: SimpleRng::new(seed),
            free: Vec::new(),
        };
        game.reset(width, height);
        game
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Body segments, head first.
    pub fn body(&self) -> impl Iterator<Item = Coord> + '_ {
        self.body.iter().copied()
    }

    pub fn head(&self) -> Coord {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn food(&self) -> Option<Coord> {
        self.food
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Move the food to `pos`, for scripted scenarios.
    ///
    /// Returns false (and leaves the food where it was) unless `pos` is an
    /// empty cell.
    pub fn place_food_at(&mut self, pos: Coord) -> bool {
        if self.food == Some(pos) {
            return true;
        }
        if !self.grid.is_free(pos) {
            return false;
        }
        if let Some(old) = self.food.take() {
            self.grid.set(old, CellState::Empty);
        }
        self.grid.set(pos, CellState::Food);
        self.food = Some(pos);
        true
    }

    /// Drop food on a uniformly chosen free cell.
    ///
    /// Samples the explicit free-cell set, so it terminates even on a nearly
    /// full grid. Returns false when no free cell is left.
    fn spawn_food(&mut self) -> bool {
        self.grid.free_cells_into(&mut self.free);
        match self.rng.pick(&self.free) {
            Some(pos) => {
                self.grid.set(pos, CellState::Food);
                self.food = Some(pos);
                debug!(x = pos.x, y = pos.y, free = self.free.len(), "food placed");
                true
            }
            None => {
                self.food = None;
                false
            }
        }
    }

    /// Whether moving the head onto `next` ends the round.
    fn is_fatal(&self, next: Coord) -> bool {
        match self.grid.get(next) {
            None | Some(CellState::Wall) => true,
            // Food never sits on the body, so a move onto the body never grows
            // the snake and the tail cell is vacated in the same tick.
            Some(CellState::Occupied(_)) => self.body.back() != Some(&next),
            Some(_) => false,
        }
    }

    fn finish(&mut self, status: GameStatus) -> GameStatus {
        self.status = status;
        info!(
            status = status.as_str(),
            score = self.score,
            length = self.body.len(),
            ticks = self.ticks,
            "snake round over"
        );
        status
    }
}

impl GridGame for SnakeGame {
    fn kind(&self) -> GameKind {
        GameKind::Snake
    }

    fn reset(&mut self, width: u16, height: u16) {
        let width = clamp_dimension(width);
        let height = clamp_dimension(height);
        let length = self.rules.initial_length.clamp(1, width / 2 + 1);

        self.grid = Grid::new(width, height);
        self.body.clear();
        // The body can never outgrow the grid, so ticks never reallocate.
        self.body.reserve(self.grid.len());
        self.heading = Direction::Right;

        let head = Coord::new((width / 2) as i16, (height / 2) as i16);
        for i in 0..length as i16 {
            let segment = head.offset(-i, 0);
            self.grid.set(segment, CellState::Occupied(PlayerId::One));
            self.body.push_back(segment);
        }

        self.pending_turn = None;
        self.pause_requested = false;
        self.food = None;
        self.score = 0;
        self.status = GameStatus::Running;
        self.ticks = 0;
        self.spawn_food();

        info!(width, height, length, "snake round started");
    }

    fn set_intent(&mut self, intent: Intent) {
        if self.status.is_terminal() {
            return;
        }
        match intent {
            Intent::Steer(direction) => {
                if self.heading.is_opposite(direction) {
                    trace!(heading = self.heading.as_str(), "reversal dropped");
                } else {
                    self.pending_turn = Some(direction);
                }
            }
            Intent::TogglePause => self.pause_requested = !self.pause_requested,
            Intent::Commit => {}
        }
    }

    fn tick(&mut self) -> GameStatus {
        let pause = std::mem::take(&mut self.pause_requested).then_some(Intent::TogglePause);
        let turn = self.pending_turn.take();
        if let Some(status) = resolve_pause(&mut self.status, pause) {
            return status;
        }

        if let Some(direction) = turn {
            if !self.heading.is_opposite(direction) {
                self.heading = direction;
            }
        }
        self.ticks += 1;

        let next = self.head().step(self.heading);
        if self.is_fatal(next) {
            return self.finish(GameStatus::Lost);
        }

        let eating = self.grid.get(next) == Some(CellState::Food);
        if !eating {
            if let Some(tail) = self.body.pop_back() {
                self.grid.set(tail, CellState::Empty);
            }
        }
        self.body.push_front(next);
        self.grid.set(next, CellState::Occupied(PlayerId::One));

        if eating {
            self.score = self.score.saturating_add(self.rules.food_reward);
            self.food = None;
            if !self.spawn_food() {
                return self.finish(GameStatus::Won(PlayerId::One));
            }
        }

        self.status
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.kind = GameKind::Snake;
        out.copy_grid(&self.grid);
        out.entity.clear();
        out.entity.extend(self.body.iter().copied());
        out.cursor = None;
        out.current_player = None;
        out.score = self.score;
        out.status = self.status;
        out.health = None;
        out.ticks = self.ticks;
    }
}
