//! Active piece - the position/rotation state machine with wall-kick
//! resolution
//!
//! The four cell offsets are cached on the piece and rotated in place; the
//! rotation index only tracks which kick-table rows apply next. A failed
//! rotation is undone with the inverse transform so the cells stay consistent
//! with how they were derived.

use crate::core::board::Board;
use crate::core::catalog;
use crate::types::{Offset, PieceCells, ShapeKind};

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    kind: ShapeKind,
    position: Offset,
    cells: PieceCells,
    rotation_index: i32,
    /// Milliseconds accumulated toward the next automatic downward move
    pub(crate) step_timer_ms: u32,
    /// Milliseconds since the last successful move or rotation
    pub(crate) lock_timer_ms: u32,
}

impl ActivePiece {
    /// Create a piece at its spawn state: catalog cells, rotation index 0,
    /// timers zeroed.
    pub fn spawn(kind: ShapeKind, position: Offset) -> Self {
        Self {
            kind,
            position,
            cells: catalog::cells(kind),
            rotation_index: 0,
            step_timer_ms: 0,
            lock_timer_ms: 0,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn position(&self) -> Offset {
        self.position
    }

    /// Local cell offsets for the current rotation
    pub fn cells(&self) -> PieceCells {
        self.cells
    }

    pub fn rotation_index(&self) -> i32 {
        self.rotation_index
    }

    pub fn lock_timer_ms(&self) -> u32 {
        self.lock_timer_ms
    }

    /// Board-space cells (local + position)
    pub fn absolute_cells(&self) -> PieceCells {
        self.cells
            .map(|(dx, dy)| (self.position.0 + dx, self.position.1 + dy))
    }

    /// Try to translate by (dx, dy). Commits and resets the lock timer on
    /// success. Also the single primitive behind soft drop and kick attempts.
    pub fn try_move(&mut self, board: &Board, dx: i32, dy: i32) -> bool {
        let target = (self.position.0 + dx, self.position.1 + dy);
        if board.is_valid_position(&self.cells, target) {
            self.position = target;
            self.lock_timer_ms = 0;
            return true;
        }
        false
    }

    /// Try to rotate 90 degrees in `direction` (+1 clockwise, -1
    /// counter-clockwise), walking the wall-kick list for the transition.
    /// On failure the piece is left bit-identical to its pre-rotation state.
    pub fn try_rotate(&mut self, board: &Board, direction: i32) -> bool {
        let original_index = self.rotation_index;
        self.rotation_index = catalog::wrap(original_index + direction, 0, 4);
        self.apply_rotation(direction);

        if self.test_wall_kicks(board, direction) {
            return true;
        }

        self.rotation_index = original_index;
        self.apply_rotation(-direction);
        false
    }

    fn apply_rotation(&mut self, direction: i32) {
        let rounding = catalog::rounding(self.kind);
        for cell in &mut self.cells {
            *cell = catalog::rotate_cell(*cell, direction, rounding);
        }
    }

    fn test_wall_kicks(&mut self, board: &Board, direction: i32) -> bool {
        let row = catalog::kick_index(self.rotation_index, direction);
        let kicks = &catalog::kick_table(self.kind)[row];
        kicks.iter().any(|&(dx, dy)| self.try_move(board, dx, dy))
    }
}
