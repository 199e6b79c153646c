//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

/// A cell coordinate or offset, (x, y). Boards are y-up: the bottom row is
/// `y_min` and "down" is (0, -1).
pub type Offset = (i32, i32);

/// The four cells of a piece, as offsets from its pivot.
pub type PieceCells = [Offset; 4];

/// Board cell (None = empty, Some = the locking piece's visual tag)
pub type Cell = Option<ShapeKind>;

/// Default board dimensions
pub const DEFAULT_BOARD_WIDTH: i32 = 10;
pub const DEFAULT_BOARD_HEIGHT: i32 = 20;

/// Default timing constants (in milliseconds)
pub const DEFAULT_STEP_DELAY_MS: u32 = 1000;
pub const DEFAULT_LOCK_DELAY_MS: u32 = 500;

/// Default spawn pivot for a 10x20 centered board: top-center, one row below
/// the top edge so the cell row at +1 lands on the top row.
pub const DEFAULT_SPAWN_POSITION: Offset = (-1, 8);

/// The seven shape identities. Doubles as the visual tag stored in occupied
/// board cells, where the rules treat it as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
    ];
}

/// Discrete input events supplied by the input collaborator each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    MoveLeft,
    MoveRight,
    SoftDropStep,
    HardDrop,
    RotateCw,
    RotateCcw,
}
