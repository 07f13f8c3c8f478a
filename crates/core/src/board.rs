//! Board module - manages the grid of locked cells
//!
//! The board is a `rows x columns` grid (default 20x10) where each cell is either
//! empty or filled with a colour. Storage is a flat row-major vector; the
//! dimensions are fixed once the board is created.
//! Coordinates: (row, col) where row 0 is the top row.

use crate::error::GameError;
use crate::types::{Cell, Color};

/// Upper bound on `rows * columns`
pub const MAX_BOARD_CELLS: usize = 1 << 20;

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: i32,
    columns: i32,
    /// Flat vector of cells, row-major order (row * columns + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with [`GameError::InvalidDimensions`] when either dimension is not
    /// positive or the board would exceed [`MAX_BOARD_CELLS`].
    pub fn new(rows: i32, columns: i32) -> Result<Self, GameError> {
        if rows <= 0 || columns <= 0 {
            return Err(GameError::InvalidDimensions { rows, columns });
        }
        let len = (rows as usize)
            .checked_mul(columns as usize)
            .filter(|&len| len <= MAX_BOARD_CELLS)
            .ok_or(GameError::InvalidDimensions { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Empty; len],
        })
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if self.is_out_of_bounds(row, col) {
            return None;
        }
        Some((row as usize) * (self.columns as usize) + (col as usize))
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Get cell at (row, col), `None` when out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (row, col) holds a locked cell.
    ///
    /// Callers bounds-check first; an out-of-range coordinate reads as unoccupied.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Cell::Filled(_)))
    }

    pub fn is_out_of_bounds(&self, row: i32, col: i32) -> bool {
        row < 0 || row >= self.rows || col < 0 || col >= self.columns
    }

    /// Write `color` into each of the given cells.
    ///
    /// The caller has already verified that every cell is in range and empty.
    pub fn place(&mut self, cells: &[(i32, i32)], color: Color) {
        for &(row, col) in cells {
            debug_assert!(
                self.get(row, col) == Some(Cell::Empty),
                "placing onto ({row}, {col}) which is out of range or occupied"
            );
            self.set(row, col, Cell::Filled(color));
        }
    }

    /// Cells of one row, left to right; empty when `row` is out of range
    pub fn row(&self, row: i32) -> &[Cell] {
        if row < 0 || row >= self.rows {
            return &[];
        }
        let width = self.columns as usize;
        let start = (row as usize) * width;
        &self.cells[start..start + width]
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, row: i32) -> bool {
        if row < 0 || row >= self.rows {
            return false;
        }
        self.row(row).iter().all(Cell::is_filled)
    }

    /// Remove row `row`, shift every row above it down by one and insert an
    /// empty row at the top.
    fn collapse_row(&mut self, row: usize) {
        let width = self.columns as usize;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(Cell::Empty);
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Scans from the bottom row upwards; each time a full row is found it is
    /// collapsed and the scan restarts from the bottom, because the collapse
    /// shifted the rows above it into new indices.
    pub fn clear_full_lines(&mut self) -> u32 {
        let mut cleared = 0;
        while let Some(row) = self.lowest_full_row() {
            self.collapse_row(row as usize);
            cleared += 1;
        }
        cleared
    }

    fn lowest_full_row(&self) -> Option<i32> {
        (0..self.rows).rev().find(|&row| self.is_row_full(row))
    }

    /// Number of filled cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the whole board, keeping its dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}
