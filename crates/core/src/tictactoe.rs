//! Tic-tac-toe - two players marking a 3x3 board through a shared cursor
//!
//! Steering moves the cursor (clamped at the edges); committing marks the cell
//! under the cursor for the player to move and hands the turn over. A commit on
//! a marked cell is ignored. After every mark the eight lines are checked for
//! a winner, then the board for a draw.

use tracing::{info, trace};

use crate::game::{resolve_pause, GridGame};
use crate::grid::Grid;
use crate::snapshot::GridSnapshot;
use crate::types::{CellState, Coord, GameKind, GameStatus, Intent, PlayerId, TICTACTOE_SIZE};

const fn c(x: i16, y: i16) -> Coord {
    Coord::new(x, y)
}

/// Every line that wins: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[Coord; 3]; 8] = [
    [c(0, 0), c(1, 0), c(2, 0)],
    [c(0, 1), c(1, 1), c(2, 1)],
    [c(0, 2), c(1, 2), c(2, 2)],
    [c(0, 0), c(0, 1), c(0, 2)],
    [c(1, 0), c(1, 1), c(1, 2)],
    [c(2, 0), c(2, 1), c(2, 2)],
    [c(0, 0), c(1, 1), c(2, 2)],
    [c(2, 0), c(1, 1), c(0, 2)],
];

#[derive(Debug, Clone)]
pub struct TicTacToe {
    grid: Grid,
    cursor: Coord,
    current: PlayerId,
    pending: Option<Intent>,
    pause_requested: bool,
    status: GameStatus,
    ticks: u64,
}

impl TicTacToe {
    pub fn new() -> Self {
        let mut game = Self {
            grid: Grid::new(TICTACTOE_SIZE, TICTACTOE_SIZE),
            cursor: Coord::new(0, 0),
            current: PlayerId::One,
            pending: None,
            pause_requested: false,
            status: GameStatus::Running,
            ticks: 0,
        };
        game.reset(TICTACTOE_SIZE, TICTACTOE_SIZE);
        game
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Owner of the cell at `(x, y)`, if marked.
    pub fn mark_at(&self, x: i16, y: i16) -> Option<PlayerId> {
        match self.grid.get(Coord::new(x, y)) {
            Some(CellState::Occupied(player)) => Some(player),
            _ => None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The first completed line, if any.
    pub fn winning_line(&self) -> Option<[Coord; 3]> {
        WINNING_LINES.iter().copied().find(|line| {
            match self.grid.get(line[0]) {
                Some(CellState::Occupied(p)) => line[1..]
                    .iter()
                    .all(|&pos| self.grid.get(pos) == Some(CellState::Occupied(p))),
                _ => false,
            }
        })
    }

    fn move_cursor(&mut self, dx: i16, dy: i16) {
        let target = self.cursor.offset(dx, dy);
        if self.grid.contains(target) {
            self.cursor = target;
        }
    }

    fn commit(&mut self) {
        if !self.grid.is_free(self.cursor) {
            trace!(x = self.cursor.x, y = self.cursor.y, "cell already marked");
            return;
        }

        let mover = self.current;
        self.grid.set(self.cursor, CellState::Occupied(mover));
        self.current = mover.other();

        if self.winning_line().is_some() {
            self.status = GameStatus::Won(mover);
        } else if self.grid.is_full() {
            self.status = GameStatus::Draw;
        }

        if self.status.is_terminal() {
            info!(status = self.status.as_str(), last = ?mover, ticks = self.ticks, "tic-tac-toe round over");
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl GridGame for TicTacToe {
    fn kind(&self) -> GameKind {
        GameKind::TicTacToe
    }

    /// The board is always 3x3; the requested size is ignored.
    fn reset(&mut self, _width: u16, _height: u16) {
        self.grid = Grid::new(TICTACTOE_SIZE, TICTACTOE_SIZE);
        self.cursor = Coord::new(0, 0);
        self.current = PlayerId::One;
        self.pending = None;
        self.pause_requested = false;
        self.status = GameStatus::Running;
        self.ticks = 0;
        info!("tic-tac-toe round started");
    }

    fn set_intent(&mut self, intent: Intent) {
        if self.status.is_terminal() {
            return;
        }
        match intent {
            Intent::TogglePause => self.pause_requested = !self.pause_requested,
            other => self.pending = Some(other),
        }
    }

    fn tick(&mut self) -> GameStatus {
        let pause = std::mem::take(&mut self.pause_requested).then_some(Intent::TogglePause);
        let pending = self.pending.take();
        if let Some(status) = resolve_pause(&mut self.status, pause) {
            return status;
        }

        match pending {
            Some(Intent::Steer(direction)) => {
                let (dx, dy) = direction.delta();
                self.move_cursor(dx, dy);
            }
            Some(Intent::Commit) => self.commit(),
            Some(Intent::TogglePause) | None => return self.status,
        }
        self.ticks += 1;

        self.status
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u32 {
        0
    }

    fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.kind = GameKind::TicTacToe;
        out.copy_grid(&self.grid);
        out.entity.clear();
        out.entity.push(self.cursor);
        out.cursor = Some(self.cursor);
        out.current_player = Some(self.current);
        out.score = 0;
        out.status = self.status;
        out.health = None;
        out.ticks = self.ticks;
    }
}
