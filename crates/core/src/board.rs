//! Board module - manages the game grid
//!
//! The board is an N x N grid of integer cells, where N is fixed when the board is created.
//! Uses a flat row-major array sized once up front; nothing reallocates during play.
//! Coordinates: (row, col) where row ranges 0..N (top to bottom), col ranges 0..N (left to right)

use std::fmt;

use crate::error::{EngineError, Result};
use crate::types::{Cell, EMPTY, MAX_TILE};

/// The game board - `size` columns x `size` rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![EMPTY; size * size],
        }
    }

    /// Build a board from explicit rows.
    ///
    /// Rows must form a non-empty square grid, and every non-zero cell must be
    /// a power of two no smaller than 2.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::InvalidConfig("board has no rows".into()));
        }
        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(EngineError::InvalidConfig(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    size
                )));
            }
            if let Some(c) = row.iter().position(|&v| !is_valid_cell(v)) {
                return Err(EngineError::InvalidConfig(format!(
                    "cell ({}, {}) holds {}, which is not a tile value",
                    r, c, row[c]
                )));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        Some(&self.cells[start..start + self.size])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps chunking legal for a zero-sized board (which has no cells anyway).
        self.cells.chunks(self.size.max(1))
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Cell]> {
        self.cells.chunks_mut(self.size.max(1))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Rows become columns: cell (r, c) moves to (c, r).
    pub fn transpose(&self) -> Board {
        let n = self.size;
        let mut out = Board::new(n);
        for r in 0..n {
            for c in 0..n {
                out.cells[c * n + r] = self.cells[r * n + c];
            }
        }
        out
    }

    /// Left-right mirror: every row reversed.
    pub fn mirror(&self) -> Board {
        let mut out = self.clone();
        for row in out.rows_mut() {
            row.reverse();
        }
        out
    }

    /// Coordinates of every empty cell, in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == EMPTY)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY).count()
    }

    /// Number of tiles on the board
    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// Check if two horizontally or vertically adjacent cells hold the same mergeable tile
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for r in 0..n {
            for c in 0..n {
                let v = self.cells[r * n + c];
                if v == EMPTY || v > MAX_TILE / 2 {
                    continue;
                }
                if c + 1 < n && self.cells[r * n + c + 1] == v {
                    return true;
                }
                if r + 1 < n && self.cells[(r + 1) * n + c] == v {
                    return true;
                }
            }
        }
        false
    }

    /// Check if any move could still change the board
    ///
    /// True iff an empty cell exists or an adjacent equal pair exists along any
    /// row or column. A game is over exactly when this is false.
    pub fn can_move(&self) -> bool {
        self.empty_count() > 0 || self.has_adjacent_pair()
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of all tile values
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

/// Empty, or a power of two from 2 up to `MAX_TILE`.
fn is_valid_cell(v: Cell) -> bool {
    v == EMPTY || (v >= 2 && v.is_power_of_two())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &v in row {
                if v == EMPTY {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", v)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
