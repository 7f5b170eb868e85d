use crate::grid::Grid;
use crate::types::{CellState, Coord, GameKind, GameStatus, PlayerId};

/// Read-only copy of a game for rendering.
///
/// A snapshot owns its data; editing it never reaches back into the game.
/// Renderers that draw every frame should keep one snapshot around and refresh
/// it with `snapshot_into` to reuse the cell buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridSnapshot {
    pub kind: GameKind,
    pub width: u16,
    pub height: u16,
    /// Row-major cells (y * width + x).
    pub cells: Vec<CellState>,
    /// Entity positions, head first. One entry for cursor-style games.
    pub entity: Vec<Coord>,
    /// Tic-tac-toe cursor.
    pub cursor: Option<Coord>,
    /// Player whose turn it is (tic-tac-toe).
    pub current_player: Option<PlayerId>,
    pub score: u32,
    pub status: GameStatus,
    /// `(current, max)` health for the maze walker.
    pub health: Option<(u32, u32)>,
    /// Ticks that advanced play since the last reset.
    pub ticks: u64,
}

impl GridSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.cells.clear();
        self.entity.clear();
        self.cursor = None;
        self.current_player = None;
        self.score = 0;
        self.status = GameStatus::Running;
        self.health = None;
        self.ticks = 0;
    }

    /// Copy grid dimensions and cells, reusing the existing buffer.
    pub fn copy_grid(&mut self, grid: &Grid) {
        self.width = grid.width();
        self.height = grid.height();
        self.cells.clear();
        self.cells.extend_from_slice(grid.cells());
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: i16, y: i16) -> Option<CellState> {
        if x < 0 || y < 0 || x as u16 >= self.width || y as u16 >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn head(&self) -> Option<Coord> {
        self.entity.first().copied()
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}

impl Default for GridSnapshot {
    fn default() -> Self {
        Self {
            kind: GameKind::Snake,
            width: 0,
            height: 0,
            cells: Vec::new(),
            entity: Vec::new(),
            cursor: None,
            current_player: None,
            score: 0,
            status: GameStatus::Running,
            health: None,
            ticks: 0,
        }
    }
}
