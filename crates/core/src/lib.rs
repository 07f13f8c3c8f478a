//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has no dependencies on the terminal, the keyboard or any other I/O:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Synchronous**: every operation runs to completion before the next event
//! - **Presentation-free**: renderers read a [`GameSnapshot`] and nothing else
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of locked cells and line clearing
//! - [`pieces`]: shape table and the active-piece engine (move, rotate, land)
//! - [`game_state`]: the controller - tick protocol, scoring, pause, game over
//! - [`rng`]: uniform random shape selection
//! - [`scoring`]: points and tick-interval progression
//! - [`snapshot`]: render-facing copy of the game state
//! - [`config`]: tunable rules with environment overrides
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::{GameConfig, GameState};
//! use classic_tetris_types::{Command, RunState};
//!
//! let mut game = GameState::with_seed(GameConfig::default(), 12345).unwrap();
//! assert_eq!(game.score(), 10); // the first spawn is worth 10 points
//!
//! game.apply(Command::MoveLeft);
//! game.apply(Command::Rotate);
//!
//! // The driver re-arms its timer with the returned interval
//! let interval = game.on_tick();
//! assert_eq!(interval, 1000);
//! assert_eq!(game.run_state(), RunState::Running);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MAX_BOARD_CELLS};
pub use config::GameConfig;
pub use error::GameError;
pub use game_state::GameState;
pub use pieces::{shape_offsets, MoveOutcome, PlacedPiece};
pub use rng::PieceRandomizer;
pub use scoring::{line_clear_points, tick_interval_ms};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
