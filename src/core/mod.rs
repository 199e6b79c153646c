//! Core rules - board, shape catalog, active piece, engine, and the ghost
//! projection

pub mod board;
pub mod catalog;
pub mod game;
pub mod ghost;
pub mod piece;
pub mod rng;

pub use board::{Board, Bounds};
pub use game::{Game, LockEvent};
pub use ghost::{project_drop, GhostPiece};
pub use piece::ActivePiece;
pub use rng::{ShapePicker, SimpleRng};
