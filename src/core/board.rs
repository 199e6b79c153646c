//! Board module - manages the occupancy grid and its line-clear algorithm
//!
//! Dense row-major storage over signed, origin-centered bounds.
//! Coordinates: (x, y) with x in [x_min, x_max), y in [y_min, y_max);
//! y grows upward, so the bottom row is `y_min`.
//!
//! The engine writes the active piece's cells into the grid at the end of
//! every tick and lifts them at the start of the next one, so the stored
//! state always reflects the piece's last settled position.

use crate::types::{Cell, Offset, ShapeKind};

/// Rectangular board bounds centered on the origin. `x_max`/`y_max` are
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x_min: i32,
    pub y_min: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Bounds for a `width` x `height` board anchored at (-width/2, -height/2).
    pub fn centered(width: i32, height: i32) -> Self {
        Self {
            x_min: -width / 2,
            y_min: -height / 2,
            width,
            height,
        }
    }

    pub fn x_max(&self) -> i32 {
        self.x_min + self.width
    }

    pub fn y_max(&self) -> i32 {
        self.y_min + self.height
    }

    pub fn contains(&self, (x, y): Offset) -> bool {
        x >= self.x_min && x < self.x_max() && y >= self.y_min && y < self.y_max()
    }
}

/// The game board - a fixed-bounds occupancy store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    bounds: Bounds,
    /// Row-major cells, bottom row first: index = (y - y_min) * width + (x - x_min)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with centered bounds
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Bounds::centered(width, height);
        Self {
            bounds,
            cells: vec![None; (width * height) as usize],
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    /// Flat index for an in-bounds coordinate
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains((x, y)) {
            return None;
        }
        Some(((y - self.bounds.y_min) * self.bounds.width + (x - self.bounds.x_min)) as usize)
    }

    /// Flat index of the first cell of row `y`. Caller guarantees `y` is in bounds.
    #[inline]
    fn row_start(&self, y: i32) -> usize {
        ((y - self.bounds.y_min) * self.bounds.width) as usize
    }

    /// Get cell at (x, y); None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if (x, y) is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check that every `cell + position` is in bounds and unoccupied.
    /// No side effects; this is the single validity contract shared by
    /// movement, rotation, locking, and the ghost projection.
    pub fn is_valid_position(&self, cells: &[Offset], position: Offset) -> bool {
        cells.iter().all(|&(dx, dy)| {
            let p = (position.0 + dx, position.1 + dy);
            self.bounds.contains(p) && !self.is_occupied(p.0, p.1)
        })
    }

    /// Write occupancy for all cells unconditionally (caller has validated)
    pub fn set_piece(&mut self, cells: &[Offset], position: Offset, tag: ShapeKind) {
        for &(dx, dy) in cells {
            self.set_cell(position.0 + dx, position.1 + dy, Some(tag));
        }
    }

    /// Remove occupancy for all cells unconditionally. Used to lift the
    /// active piece from the grid at the top of each tick.
    pub fn clear_piece(&mut self, cells: &[Offset], position: Offset) {
        for &(dx, dy) in cells {
            self.set_cell(position.0 + dx, position.1 + dy, None);
        }
    }

    /// Check if row `y` is completely filled
    pub fn is_row_full(&self, y: i32) -> bool {
        if y < self.bounds.y_min || y >= self.bounds.y_max() {
            return false;
        }
        let start = self.row_start(y);
        let end = start + self.bounds.width as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows, letting the rows above each fall one unit, and
    /// return the number of rows cleared.
    ///
    /// Single upward sweep from the bottom; the scan index is not advanced
    /// after a clear, so the row shifted down into the same index is
    /// re-examined.
    pub fn clear_full_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = self.bounds.y_min;
        while row < self.bounds.y_max() {
            if self.is_row_full(row) {
                self.shift_down_from(row);
                cleared += 1;
            } else {
                row += 1;
            }
        }
        cleared
    }

    /// Delete `row` by copying each row above it down one unit; the top row
    /// becomes empty.
    fn shift_down_from(&mut self, row: i32) {
        let width = self.bounds.width as usize;
        let top = self.bounds.y_max() - 1;
        for y in row..top {
            let src = self.row_start(y + 1);
            let dst = self.row_start(y);
            self.cells.copy_within(src..src + width, dst);
        }
        let start = self.row_start(top);
        self.cells[start..start + width].fill(None);
    }

    /// Empty the entire board
    pub fn clear_all(&mut self) {
        self.cells.fill(None);
    }

    /// All occupied cells with their visual tags (the render-collaborator surface)
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Offset, ShapeKind)> + '_ {
        let bounds = self.bounds;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|tag| {
                let x = bounds.x_min + i as i32 % bounds.width;
                let y = bounds.y_min + i as i32 / bounds.width;
                ((x, y), tag)
            })
        })
    }
}
