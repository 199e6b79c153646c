//! Falling-block puzzle rules engine - pure, deterministic, and testable
//!
//! This crate is the rules core only: the occupancy grid, the falling piece's
//! state machine, the shared shape/kick tables, and the orchestration loop.
//! It has **zero dependencies** on UI, input devices, or I/O, making it:
//!
//! - **Deterministic**: same seed and input stream produce identical games
//! - **Testable**: every rule is reachable without a frontend
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`core::board`]: fixed-bounds occupancy grid with the line-clear sweep
//! - [`core::catalog`]: per-shape cell layouts, wall-kick tables, rotation transform
//! - [`core::piece`]: active piece movement and rotation with wall kicks
//! - [`core::game`]: spawn -> fall -> lock -> clear -> respawn cycle
//! - [`core::ghost`]: read-only landing projection for preview display
//! - [`core::rng`]: seeded uniform shape selection
//! - [`config`]: board dimensions, spawn position, step and lock delays
//!
//! # Game Rules
//!
//! - Boards are y-up with origin-centered bounds; pieces fall toward `y_min`.
//! - Rotation follows the reference rotation system: wall kicks from an 8x5
//!   per-transition table, half-cell pivots with ceiling rounding for I and O.
//! - A grounded piece locks once its lock delay elapses at a step check; a
//!   hard drop locks immediately.
//! - A blocked spawn ends the game: the board is wiped and the engine goes
//!   inert rather than reporting an error.
//!
//! # Example
//!
//! ```
//! use gridfall::types::GameInput;
//! use gridfall::{Game, GameConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut game = Game::new(GameConfig::default(), 12345)?;
//!
//! // One 16ms frame with a nudge and a rotation, then drop the piece.
//! game.tick(16, &[GameInput::MoveRight, GameInput::RotateCw]);
//! game.tick(16, &[GameInput::HardDrop]);
//!
//! let event = game.take_last_event().unwrap();
//! assert_eq!(event.lines_cleared, 0);
//! assert!(game.active().is_some());
//! # Ok(())
//! # }
//! ```
//!
//! Call [`Game::tick`] once per frame with the elapsed milliseconds and the
//! frame's input events.

pub mod config;
pub mod core;
pub mod types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use core::{ActivePiece, Board, Bounds, Game, GhostPiece, LockEvent};
