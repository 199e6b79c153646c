//! Shape catalog - per-shape cell layouts, wall-kick tables, and the
//! rotation transform
//!
//! Static data for all 7 shapes, shared read-only by every piece. Rotation
//! reproduces the reference rotation system: shapes with an integer pivot
//! rotate exactly; I and O pivot on a half-cell boundary, so their cells are
//! offset by (-0.5, -0.5) before the 90-degree matrix and the result is
//! rounded back with ceiling. The transform runs in doubled fixed-point
//! integers, no floats.

use anyhow::{ensure, Result};

use crate::types::{Offset, PieceCells, ShapeKind};

/// Ordered kick attempts for one rotation transition
pub type KickRow = [Offset; 5];

/// 8 transition rows x 5 attempts per row
pub type KickTable = [KickRow; 8];

/// Local cell offsets from the pivot at rotation index 0 (y-up)
pub fn cells(kind: ShapeKind) -> PieceCells {
    match kind {
        ShapeKind::I => [(-1, 1), (0, 1), (1, 1), (2, 1)],
        ShapeKind::J => [(-1, 1), (-1, 0), (0, 0), (1, 0)],
        ShapeKind::L => [(1, 1), (-1, 0), (0, 0), (1, 0)],
        ShapeKind::O => [(0, 1), (1, 1), (0, 0), (1, 0)],
        ShapeKind::S => [(0, 1), (1, 1), (-1, 0), (0, 0)],
        ShapeKind::T => [(0, 1), (-1, 0), (0, 0), (1, 0)],
        ShapeKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
    }
}

/// Rounding rule applied after the rotation matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Integer pivot: the matrix is exact, round-to-nearest is the identity
    Nearest,
    /// Half-cell pivot: offset by (-0.5, -0.5), rotate, round with ceiling
    Ceiling,
}

/// Rounding mode for a shape. I and O are the symmetric shapes whose visual
/// center sits between cells.
pub fn rounding(kind: ShapeKind) -> Rounding {
    match kind {
        ShapeKind::I | ShapeKind::O => Rounding::Ceiling,
        _ => Rounding::Nearest,
    }
}

/// Rotate one local cell by 90 degrees times `direction` (+1 clockwise,
/// -1 counter-clockwise).
pub fn rotate_cell(cell: Offset, direction: i32, rounding: Rounding) -> Offset {
    match rounding {
        Rounding::Nearest => (cell.1 * direction, -cell.0 * direction),
        Rounding::Ceiling => {
            // Half-cell units: 2c - 1 moves the pivot to (-0.5, -0.5).
            let x2 = 2 * cell.0 - 1;
            let y2 = 2 * cell.1 - 1;
            let rx2 = y2 * direction;
            let ry2 = -x2 * direction;
            (ceil_half(rx2), ceil_half(ry2))
        }
    }
}

/// Ceiling of `v / 2`; `v` is always odd here
fn ceil_half(v: i32) -> i32 {
    (v + 1).div_euclid(2)
}

/// Wrap `value` into `[min, max)`, well-defined for negative inputs
pub fn wrap(value: i32, min: i32, max: i32) -> i32 {
    min + (value - min).rem_euclid(max - min)
}

/// Kick-table row for the transition that lands on `rotation_index` when
/// rotating by `direction`.
pub fn kick_index(rotation_index: i32, direction: i32) -> usize {
    let raw = rotation_index * 2 - i32::from(direction < 0);
    wrap(raw, 0, 8) as usize
}

/// Kick table for a shape. I has its own table; J, L, O, S, T, Z share one.
pub fn kick_table(kind: ShapeKind) -> &'static KickTable {
    match kind {
        ShapeKind::I => &I_KICKS,
        _ => &JLOSTZ_KICKS,
    }
}

const I_KICKS: KickTable = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];

const JLOSTZ_KICKS: KickTable = [
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

/// Structural check of the static tables, run once at engine initialization.
/// A malformed catalog is a programming error and must fail fast rather than
/// silently producing wrong rotations.
pub fn validate() -> Result<()> {
    for kind in ShapeKind::ALL {
        let cells = cells(kind);
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                ensure!(a != b, "{:?} has duplicate cell {:?}", kind, a);
            }
        }
        for (row, kicks) in kick_table(kind).iter().enumerate() {
            ensure!(
                kicks[0] == (0, 0),
                "{:?} kick row {} must lead with the identity offset",
                kind,
                row
            );
        }
    }
    Ok(())
}
