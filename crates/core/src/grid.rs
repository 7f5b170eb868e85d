//! Grid module - the bounded playing field
//!
//! A `width x height` field of [`CellState`]s stored as a flat, row-major
//! vector. Coordinates are `(x, y)` with `x` in `0..width` (left to right) and
//! `y` in `0..height` (top to bottom). Lookups outside the field return `None`
//! instead of panicking so callers can use them directly as bounds checks.

use arrayvec::ArrayVec;

use crate::types::{CellState, Coord, Direction};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Row-major cells (y * width + x)
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width as usize * height as usize],
        }
    }

    /// Create a grid whose outer ring is [`CellState::Wall`].
    pub fn with_border(width: u16, height: u16) -> Self {
        let mut grid = Self::new(width, height);
        for x in 0..width as i16 {
            grid.set(Coord::new(x, 0), CellState::Wall);
            grid.set(Coord::new(x, height as i16 - 1), CellState::Wall);
        }
        for y in 0..height as i16 {
            grid.set(Coord::new(0, y), CellState::Wall);
            grid.set(Coord::new(width as i16 - 1, y), CellState::Wall);
        }
        grid
    }

    #[inline(always)]
    fn index(&self, pos: Coord) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.y as usize * self.width as usize + pos.x as usize)
    }

    fn coord_of(&self, idx: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((idx % w) as i16, (idx / w) as i16)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if `pos` lies inside `[0,width) x [0,height)`.
    pub fn contains(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u16) < self.width && (pos.y as u16) < self.height
    }

    /// Cell at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Coord) -> Option<CellState> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Overwrite the cell at `pos`. Returns false if out of bounds.
    pub fn set(&mut self, pos: Coord, cell: CellState) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True if `pos` is inside the grid and empty.
    pub fn is_free(&self, pos: Coord) -> bool {
        matches!(self.get(pos), Some(CellState::Empty))
    }

    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(CellState::is_empty)
    }

    pub fn count(&self, cell: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Collect every empty coordinate into `out`, reusing its allocation.
    pub fn free_cells_into(&self, out: &mut Vec<Coord>) {
        out.clear();
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_empty() {
                out.push(self.coord_of(idx));
            }
        }
    }

    /// In-bounds orthogonal neighbours of `pos`.
    pub fn neighbors(&self, pos: Coord) -> ArrayVec<Coord, 4> {
        let mut out = ArrayVec::new();
        for direction in Direction::ALL {
            let next = pos.step(direction);
            if self.contains(next) {
                out.push(next);
            }
        }
        out
    }

    /// Reset every cell to `cell`.
    pub fn fill(&mut self, cell: CellState) {
        self.cells.fill(cell);
    }

    /// Read-only view of the row-major cells.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (self.coord_of(idx), cell))
    }
}
