//! Maze - a walker escaping a walled maze, collecting items on the way
//!
//! The field has a solid outer wall and randomly placed interior walls. The
//! walker starts in the top-left corner and wins by reaching the exit in the
//! bottom-right corner. Items are resolved by the maze when stepped on:
//! treasure adds score, traps cost health, potions restore it. Running out of
//! health loses the round.
//!
//! Generation re-rolls walls until the exit is reachable and, failing that,
//! carves a corridor, so every round can be won.

use std::collections::VecDeque;

use tracing::{debug, info, trace};

use crate::config::{clamp_dimension, MazeConfig};
use crate::game::{resolve_pause, GridGame};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snapshot::GridSnapshot;
use crate::types::{
    CellState, Coord, Direction, GameKind, GameStatus, Intent, MazeItem, PlayerId,
    MAZE_GENERATION_ATTEMPTS,
};

/// Treasure value range (inclusive).
const TREASURE_VALUE: (u32, u32) = (25, 74);
/// Trap damage range (inclusive).
const TRAP_DAMAGE: (u32, u32) = (10, 29);
/// Potion heal range (inclusive).
const POTION_HEAL: (u32, u32) = (20, 49);

#[derive(Debug, Clone)]
pub struct MazeGame {
    grid: Grid,
    player: Coord,
    exit: Coord,
    health: u32,
    score: u32,
    pending_step: Option<Direction>,
    pause_requested: bool,
    last_pickup: Option<MazeItem>,
    status: GameStatus,
    ticks: u64,
    rules: MazeConfig,
    rng: SimpleRng,
}

impl MazeGame {
    pub fn new(width: u16, height: u16, seed: u32) -> Self {
        Self::with_config(MazeConfig::default(), width, height, seed)
    }

    pub fn with_config(rules: MazeConfig, width: u16, height: u16, seed: u32) -> Self {
        let mut game = Self {
            grid: Grid::new(0, 0),
            player: Coord::new(1, 1),
            exit: Coord::new(1, 1),
            health: rules.max_health,
            score: 0,
            pending_step: None,
            pause_requested: false,
            last_pickup: None,
            status: GameStatus::Running,
            ticks: 0,
            rules,
            rng: SimpleRng::new(seed),
        };
        game.reset(width, height);
        game
    }

    pub fn player(&self) -> Coord {
        self.player
    }

    pub fn exit(&self) -> Coord {
        self.exit
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.rules.max_health
    }

    /// The item picked up on the most recent step, if any.
    pub fn last_pickup(&self) -> Option<MazeItem> {
        self.last_pickup
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replace the cell at `pos`, for scripted scenarios.
    ///
    /// The start and exit cells are left untouched. Returns false if `pos` is
    /// outside the grid or is one of those cells.
    pub fn place_cell(&mut self, pos: Coord, cell: CellState) -> bool {
        if pos == self.player || pos == self.exit {
            return false;
        }
        self.grid.set(pos, cell)
    }

    /// Roll a walled layout without items.
    fn roll_walls(&mut self, width: u16, height: u16) -> Grid {
        let mut grid = Grid::with_border(width, height);
        for y in 1..height as i16 - 1 {
            for x in 1..width as i16 - 1 {
                if self.rng.chance(self.rules.wall_percent) {
                    grid.set(Coord::new(x, y), CellState::Wall);
                }
            }
        }
        grid.set(self.player, CellState::Empty);
        grid.set(self.exit, CellState::Empty);
        grid
    }

    /// Open an L-shaped corridor from the start to the exit.
    fn carve_corridor(grid: &mut Grid, from: Coord, to: Coord) {
        let mut pos = from;
        while pos.x != to.x {
            pos = pos.offset((to.x - pos.x).signum(), 0);
            grid.set(pos, CellState::Empty);
        }
        while pos.y != to.y {
            pos = pos.offset(0, (to.y - pos.y).signum());
            grid.set(pos, CellState::Empty);
        }
    }

    fn scatter_items(&mut self) {
        let treasure = self.rules.treasure_percent;
        let trap = treasure + self.rules.trap_percent;
        let potion = trap + self.rules.potion_percent;

        for y in 1..self.grid.height() as i16 - 1 {
            for x in 1..self.grid.width() as i16 - 1 {
                let pos = Coord::new(x, y);
                if pos == self.player || pos == self.exit || !self.grid.is_free(pos) {
                    continue;
                }
                let roll = self.rng.next_range(100);
                let item = if roll < treasure {
                    MazeItem::Treasure {
                        value: self.rng.range_inclusive(TREASURE_VALUE.0, TREASURE_VALUE.1),
                    }
                } else if roll < trap {
                    MazeItem::Trap {
                        damage: self.rng.range_inclusive(TRAP_DAMAGE.0, TRAP_DAMAGE.1),
                    }
                } else if roll < potion {
                    MazeItem::Potion {
                        heal: self.rng.range_inclusive(POTION_HEAL.0, POTION_HEAL.1),
                    }
                } else {
                    continue;
                };
                self.grid.set(pos, CellState::Item(item));
            }
        }
    }

    fn apply_item(&mut self, item: MazeItem) {
        match item {
            MazeItem::Treasure { value } => self.score = self.score.saturating_add(value),
            MazeItem::Trap { damage } => self.health = self.health.saturating_sub(damage),
            MazeItem::Potion { heal } => {
                self.health = self.health.saturating_add(heal).min(self.rules.max_health)
            }
        }
        debug!(item = item.as_str(), health = self.health, score = self.score, "item picked up");
    }

    fn finish(&mut self, status: GameStatus) -> GameStatus {
        self.status = status;
        info!(
            status = status.as_str(),
            score = self.score,
            health = self.health,
            ticks = self.ticks,
            "maze round over"
        );
        status
    }
}

/// Breadth-first search over non-wall cells.
pub fn has_path(grid: &Grid, from: Coord, to: Coord) -> bool {
    let passable = |pos: Coord| !matches!(grid.get(pos), None | Some(CellState::Wall));
    if !passable(from) || !passable(to) {
        return false;
    }

    let width = grid.width() as usize;
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::new();
    seen[from.y as usize * width + from.x as usize] = true;
    queue.push_back(from);

    while let Some(pos) = queue.pop_front() {
        if pos == to {
            return true;
        }
        for next in grid.neighbors(pos) {
            let idx = next.y as usize * width + next.x as usize;
            if !seen[idx] && passable(next) {
                seen[idx] = true;
                queue.push_back(next);
            }
        }
    }
    false
}

impl GridGame for MazeGame {
    fn kind(&self) -> GameKind {
        GameKind::Maze
    }

    fn reset(&mut self, width: u16, height: u16) {
        let width = clamp_dimension(width);
        let height = clamp_dimension(height);
        self.player = Coord::new(1, 1);
        self.exit = Coord::new(width as i16 - 2, height as i16 - 2);

        let mut grid = self.roll_walls(width, height);
        let mut attempt = 1;
        while !has_path(&grid, self.player, self.exit) {
            if attempt >= MAZE_GENERATION_ATTEMPTS {
                debug!(attempt, "no path to exit, carving corridor");
                Self::carve_corridor(&mut grid, self.player, self.exit);
                break;
            }
            attempt += 1;
            grid = self.roll_walls(width, height);
        }
        self.grid = grid;
        self.scatter_items();
        self.grid.set(self.exit, CellState::Exit);

        self.health = self.rules.max_health;
        self.score = 0;
        self.pending_step = None;
        self.pause_requested = false;
        self.last_pickup = None;
        self.status = GameStatus::Running;
        self.ticks = 0;

        info!(width, height, attempt, "maze round started");
    }

    fn set_intent(&mut self, intent: Intent) {
        if self.status.is_terminal() {
            return;
        }
        match intent {
            Intent::Steer(direction) => self.pending_step = Some(direction),
            Intent::TogglePause => self.pause_requested = !self.pause_requested,
            Intent::Commit => {}
        }
    }

    fn tick(&mut self) -> GameStatus {
        let pause = std::mem::take(&mut self.pause_requested).then_some(Intent::TogglePause);
        let step = self.pending_step.take();
        if let Some(status) = resolve_pause(&mut self.status, pause) {
            return status;
        }
        let Some(direction) = step else {
            return self.status;
        };

        let target = self.player.step(direction);
        let cell = match self.grid.get(target) {
            None | Some(CellState::Wall) => {
                trace!(x = target.x, y = target.y, "step blocked");
                return self.status;
            }
            Some(cell) => cell,
        };

        self.player = target;
        self.last_pickup = None;
        self.ticks += 1;

        match cell {
            CellState::Item(item) => {
                self.grid.set(target, CellState::Empty);
                self.last_pickup = Some(item);
                self.apply_item(item);
                if self.health == 0 {
                    return self.finish(GameStatus::Lost);
                }
            }
            CellState::Exit => return self.finish(GameStatus::Won(PlayerId::One)),
            _ => {}
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
        out.kind = GameKind::Maze;
        out.copy_grid(&self.grid);
        out.entity.clear();
        out.entity.push(self.player);
        out.cursor = None;
        out.current_player = None;
        out.score = self.score;
        out.status = self.status;
        out.health = Some((self.health, self.rules.max_health));
        out.ticks = self.ticks;
    }
}
