//! Runtime configuration surface for the engine
//!
//! Plain numeric parameters: board dimensions, spawn pivot, and the two
//! timing constants. Validation is fatal at initialization; there are no
//! recoverable configuration errors once a game is running.

use anyhow::{ensure, Result};

use crate::core::board::Bounds;
use crate::types::{
    Offset, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_LOCK_DELAY_MS,
    DEFAULT_SPAWN_POSITION, DEFAULT_STEP_DELAY_MS,
};

/// Engine configuration, fixed for the lifetime of a [`crate::Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    /// Pivot cell where new pieces appear, rotation index 0.
    pub spawn_position: Offset,
    /// Interval between automatic one-cell downward moves.
    pub step_delay_ms: u32,
    /// Grace period a grounded piece is given before it locks.
    pub lock_delay_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            spawn_position: DEFAULT_SPAWN_POSITION,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            lock_delay_ms: DEFAULT_LOCK_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Check the configuration; called by [`crate::Game::new`] before any
    /// state is built.
    pub fn validate(&self) -> Result<()> {
        // Every shape fits inside a 4x4 footprint around its pivot.
        ensure!(
            self.board_width >= 4,
            "board width must be at least 4, got {}",
            self.board_width
        );
        ensure!(
            self.board_height >= 4,
            "board height must be at least 4, got {}",
            self.board_height
        );
        ensure!(self.step_delay_ms > 0, "step delay must be nonzero");
        let bounds = Bounds::centered(self.board_width, self.board_height);
        ensure!(
            bounds.contains(self.spawn_position),
            "spawn position {:?} is outside the board bounds {:?}",
            self.spawn_position,
            bounds
        );
        Ok(())
    }
}
