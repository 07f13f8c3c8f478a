//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. The engine never
//! sees key codes; the runner decides when a command is delivered.

pub mod map;

pub use classic_tetris_types as types;

pub use map::{handle_key_event, is_acknowledge, should_quit};
