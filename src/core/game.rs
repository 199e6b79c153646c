//! Engine orchestration - the spawn, fall, lock, clear, respawn cycle
//!
//! `Game` exclusively owns the board and the active piece and advances them
//! from `tick`: lift the piece's cells from the grid, apply the tick's input
//! events, run gravity, then write the cells back. Every transition is
//! synchronous; no observer can see a half-applied rotation.

use anyhow::Result;

use crate::config::GameConfig;
use crate::core::board::Board;
use crate::core::catalog;
use crate::core::ghost::{project_drop, GhostPiece};
use crate::core::piece::ActivePiece;
use crate::core::rng::ShapePicker;
use crate::types::GameInput;

/// Emitted when a piece locks; consumed by scoring/observer collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
}

/// The rules engine
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    active: Option<ActivePiece>,
    picker: ShapePicker,
    last_event: Option<LockEvent>,
    game_over: bool,
}

impl Game {
    /// Build the engine and spawn the first piece. Fails fast on a malformed
    /// configuration or catalog; there are no recoverable errors after this.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self> {
        config.validate()?;
        catalog::validate()?;

        let mut game = Self {
            board: Board::new(config.board_width, config.board_height),
            config,
            active: None,
            picker: ShapePicker::new(seed),
            last_event: None,
            game_over: false,
        };
        game.spawn();
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Landing preview for the active piece
    pub fn ghost_piece(&self) -> Option<GhostPiece> {
        self.active.as_ref().map(|p| project_drop(&self.board, p))
    }

    /// Advance one frame by `dt_ms` with this tick's input events.
    ///
    /// The active piece is lifted from the grid first and written back last,
    /// so between ticks the grid always reflects the piece's settled
    /// position. A hard drop locks immediately and ends input processing for
    /// the tick.
    pub fn tick(&mut self, dt_ms: u32, inputs: &[GameInput]) {
        if self.game_over {
            return;
        }
        let Some(mut piece) = self.active.take() else {
            return;
        };
        self.board.clear_piece(&piece.cells(), piece.position());

        // Accumulates freely; any successful move below resets it, so it
        // only builds up while the piece is blocked from falling.
        piece.lock_timer_ms += dt_ms;

        let mut locked = false;
        for &input in inputs {
            match input {
                GameInput::MoveLeft => {
                    piece.try_move(&self.board, -1, 0);
                }
                GameInput::MoveRight => {
                    piece.try_move(&self.board, 1, 0);
                }
                GameInput::SoftDropStep => {
                    piece.try_move(&self.board, 0, -1);
                }
                GameInput::RotateCw => {
                    piece.try_rotate(&self.board, 1);
                }
                GameInput::RotateCcw => {
                    piece.try_rotate(&self.board, -1);
                }
                GameInput::HardDrop => {
                    while piece.try_move(&self.board, 0, -1) {}
                    locked = true;
                }
            }
            if locked {
                break;
            }
        }

        if !locked {
            piece.step_timer_ms += dt_ms;
            if piece.step_timer_ms >= self.config.step_delay_ms {
                piece.step_timer_ms = 0;
                piece.try_move(&self.board, 0, -1);
                // The move above reset the timer if it succeeded, so this
                // only fires after lock-delay worth of blocked time.
                if piece.lock_timer_ms >= self.config.lock_delay_ms {
                    locked = true;
                }
            }
        }

        if locked {
            self.lock(piece);
        } else {
            self.board
                .set_piece(&piece.cells(), piece.position(), piece.kind());
            self.active = Some(piece);
        }
    }

    /// Commit the piece into the grid, clear full lines, record the event,
    /// and bring in the next piece.
    fn lock(&mut self, piece: ActivePiece) {
        self.board
            .set_piece(&piece.cells(), piece.position(), piece.kind());
        let lines_cleared = self.board.clear_full_lines();
        self.last_event = Some(LockEvent { lines_cleared });
        self.spawn();
    }

    /// Draw the next shape and place it at the spawn position. A blocked
    /// spawn is the terminal state, not an error: the board is wiped and the
    /// engine goes inert.
    fn spawn(&mut self) {
        let kind = self.picker.next();
        let piece = ActivePiece::spawn(kind, self.config.spawn_position);

        if self.board.is_valid_position(&piece.cells(), piece.position()) {
            self.board
                .set_piece(&piece.cells(), piece.position(), piece.kind());
            self.active = Some(piece);
        } else {
            self.board.clear_all();
            self.active = None;
            self.game_over = true;
        }
    }

    /// Wipe the board and start over with a fresh piece sequence
    pub fn reset(&mut self, seed: u32) {
        self.board.clear_all();
        self.picker = ShapePicker::new(seed);
        self.active = None;
        self.last_event = None;
        self.game_over = false;
        self.spawn();
    }
}
