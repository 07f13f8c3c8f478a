//! Pieces module - shape table and the active-piece engine
//!
//! Every shape is four `(d_row, d_col)` offsets measured from an origin point.
//! All transforms follow the same validate-then-commit pattern: build a
//! candidate piece, check it against the board bounds and the locked cells,
//! and only replace the live piece when both checks pass.
//!
//! Rotation is a plain 90° pivot about the origin, `(d_row, d_col) -> (d_col, -d_row)`,
//! in one fixed direction and without any wall-kick search. Near walls some
//! shapes therefore fail to rotate where kick-based rule sets would succeed.

use crate::board::Board;
use crate::types::{Color, ShapeKind, SPAWN_ORIGIN};

/// Offset of a single cell relative to the piece origin, as (d_row, d_col)
pub type CellOffset = (i32, i32);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [CellOffset; 4];

/// Get the unrotated offsets for a shape
pub fn shape_offsets(kind: ShapeKind) -> PieceShape {
    match kind {
        ShapeKind::T => [(0, -1), (0, 0), (0, 1), (1, 0)],
        ShapeKind::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
        ShapeKind::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
        ShapeKind::J => [(0, -1), (0, 0), (0, 1), (1, 1)],
        ShapeKind::L => [(0, -1), (0, 0), (0, 1), (1, -1)],
        ShapeKind::S => [(0, -1), (0, 0), (1, 0), (1, 1)],
        ShapeKind::Z => [(1, -1), (1, 0), (0, 0), (0, 1)],
    }
}

/// Rotate offsets a quarter turn about the origin
pub fn rotate_offsets(shape: PieceShape) -> PieceShape {
    shape.map(|(d_row, d_col)| (d_col, -d_row))
}

/// Result of the down-step, the one transform whose failure means something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece cannot move down and must be locked
    Landed,
}

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedPiece {
    pub kind: ShapeKind,
    pub offsets: PieceShape,
    pub origin: (i32, i32),
}

impl PlacedPiece {
    /// A freshly spawned piece at the spawn origin. No validation is done here.
    pub fn spawn(kind: ShapeKind) -> Self {
        Self::at(kind, SPAWN_ORIGIN)
    }

    /// An unrotated piece with its origin at `origin`
    pub fn at(kind: ShapeKind, origin: (i32, i32)) -> Self {
        Self {
            kind,
            offsets: shape_offsets(kind),
            origin,
        }
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Absolute (row, col) of the four cells
    pub fn cells(&self) -> [(i32, i32); 4] {
        let (row, col) = self.origin;
        self.offsets.map(|(d_row, d_col)| (row + d_row, col + d_col))
    }

    /// Candidate moved by (d_row, d_col)
    pub fn shifted(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            origin: (self.origin.0 + d_row, self.origin.1 + d_col),
            ..*self
        }
    }

    /// Candidate rotated a quarter turn about the origin
    pub fn rotated(&self) -> Self {
        Self {
            offsets: rotate_offsets(self.offsets),
            ..*self
        }
    }

    /// Every cell lies inside the board
    pub fn check_position(&self, board: &Board) -> bool {
        self.cells()
            .iter()
            .all(|&(row, col)| !board.is_out_of_bounds(row, col))
    }

    /// Every cell is empty on the board. Only meaningful after `check_position`.
    pub fn check_existing_pieces(&self, board: &Board) -> bool {
        self.cells()
            .iter()
            .all(|&(row, col)| !board.is_occupied(row, col))
    }

    /// Bounds and occupancy checks together
    pub fn fits(&self, board: &Board) -> bool {
        self.check_position(board) && self.check_existing_pieces(board)
    }

    /// Replace `self` with `candidate` if it fits
    fn commit_if_fits(&mut self, candidate: Self, board: &Board) -> bool {
        if candidate.fits(board) {
            *self = candidate;
            true
        } else {
            false
        }
    }

    pub fn try_move_down(&mut self, board: &Board) -> MoveOutcome {
        if self.commit_if_fits(self.shifted(1, 0), board) {
            MoveOutcome::Moved
        } else {
            MoveOutcome::Landed
        }
    }

    /// Returns false on a wall or obstruction bump
    pub fn try_move_left(&mut self, board: &Board) -> bool {
        self.commit_if_fits(self.shifted(0, -1), board)
    }

    pub fn try_move_right(&mut self, board: &Board) -> bool {
        self.commit_if_fits(self.shifted(0, 1), board)
    }

    /// Rotate if the result fits. The square never rotates.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        if self.kind == ShapeKind::O {
            return false;
        }
        self.commit_if_fits(self.rotated(), board)
    }
}
