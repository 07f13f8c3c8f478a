//! Construction-time errors.
//!
//! Rejected moves are ordinary gameplay and never surface here.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid board dimensions: {rows} rows x {columns} columns")]
    InvalidDimensions { rows: i32, columns: i32 },
    #[error("a {rows}x{columns} board cannot hold every shape at the spawn origin")]
    SpawnAreaOutOfBounds { rows: i32, columns: i32 },
}
