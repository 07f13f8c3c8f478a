use crate::pieces::PlacedPiece;
use crate::types::{Cell, Color, RunState, ShapeKind};

/// Render-facing view of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color: Color,
    pub cells: [(i32, i32); 4],
}

impl From<PlacedPiece> for ActiveSnapshot {
    fn from(value: PlacedPiece) -> Self {
        Self {
            kind: value.kind,
            color: value.color(),
            cells: value.cells(),
        }
    }
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: i32,
    pub columns: i32,
    /// Row-major locked cells, `rows * columns` long
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub state: RunState,
    pub tick_interval_ms: u32,
    pub episode: u32,
}

impl GameSnapshot {
    /// Locked cell at (row, col), `None` when out of bounds
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || row >= self.rows || col < 0 || col >= self.columns {
            return None;
        }
        self.board
            .get((row as usize) * (self.columns as usize) + (col as usize))
            .copied()
    }

    /// Whether the active piece covers (row, col)
    pub fn is_active_cell(&self, row: i32, col: i32) -> bool {
        self.active
            .map(|active| active.cells.contains(&(row, col)))
            .unwrap_or(false)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            board: Vec::new(),
            active: None,
            score: 0,
            lines: 0,
            pieces: 0,
            state: RunState::Running,
            tick_interval_ms: 0,
            episode: 0,
        }
    }
}
