//! Classic Tetris (workspace facade crate).
//!
//! Exposes `classic_tetris::{core,input,term,types}` while the implementation lives
//! in dedicated crates under `crates/`.

pub use classic_tetris_core as core;
pub use classic_tetris_input as input;
pub use classic_tetris_term as term;
pub use classic_tetris_types as types;
