//! Ghost projection - a read-only hard-drop simulation for landing preview
//!
//! Uses the same validity contract as the core, without mutating board or
//! piece. The engine keeps the active piece's cells written into the grid
//! between ticks, so the scan must treat those cells as empty; otherwise the
//! piece would collide with itself and the preview would stick at the
//! current row.

use crate::core::board::Board;
use crate::core::piece::ActivePiece;
use crate::types::{Offset, PieceCells};

/// Landing preview: the tracked piece's cells at its drop position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostPiece {
    pub cells: PieceCells,
    pub position: Offset,
}

impl GhostPiece {
    /// Board-space cells (local + position)
    pub fn absolute_cells(&self) -> PieceCells {
        self.cells
            .map(|(dx, dy)| (self.position.0 + dx, self.position.1 + dy))
    }
}

/// Simulate a hard drop of `piece`: descend one row at a time while every
/// cell stays in bounds and lands on nothing but the piece's own footprint.
pub fn project_drop(board: &Board, piece: &ActivePiece) -> GhostPiece {
    let own = piece.absolute_cells();
    let open = |p: Offset| {
        board.bounds().contains(p) && (!board.is_occupied(p.0, p.1) || own.contains(&p))
    };

    let cells = piece.cells();
    let (x, mut y) = piece.position();
    loop {
        let next = y - 1;
        let fits = cells.iter().all(|&(dx, dy)| open((x + dx, next + dy)));
        if fits {
            y = next;
        } else {
            break;
        }
    }

    GhostPiece {
        cells,
        position: (x, y),
    }
}
