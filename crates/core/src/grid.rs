//! Grid module - manages the playfield
//!
//! The grid is a `rows x cols` matrix where each cell is either empty or holds the
//! color of the piece that settled there. Storage is a flat row-major vector that is
//! allocated once; dimensions never change after construction.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row (top to bottom).

use crate::shape::Shape;
use crate::types::{Cell, Rgb};

/// The playfield - flat row-major storage of `rows * cols` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u16,
    cols: u16,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        x < 0 || y < 0 || x >= self.cols as i16 || y >= self.rows as i16
    }

    /// Borrow one row of cells
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows as usize {
            return None;
        }
        let width = self.cols as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate over rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1) as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Surviving rows keep their order and settle at the bottom; the freed rows at
    /// the top become empty. Adjacent full rows are all removed in one pass.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols as usize;
        let mut write_y = self.rows as usize;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Fresh empty rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Check whether `shape` placed with its top-left corner at (x, y) would leave the
    /// grid or overlap a settled cell.
    pub fn collides(&self, shape: &Shape, x: i16, y: i16) -> bool {
        shape.cells().iter().any(|&(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            self.is_out_of_bounds(px, py) || self.is_occupied(px, py)
        })
    }

    /// Write the occupied cells of `shape` into the grid with `color`.
    ///
    /// Cells that fall outside the grid are skipped.
    pub fn merge(&mut self, shape: &Shape, x: i16, y: i16, color: Rgb) {
        for &(dx, dy) in shape.cells().iter() {
            self.set(x + dx, y + dy, Some(color));
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of settled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a whole row with `color`
    pub fn fill_row(&mut self, y: usize, color: Rgb) {
        if y >= self.rows as usize {
            return;
        }
        let width = self.cols as usize;
        self.cells[y * width..(y + 1) * width].fill(Some(color));
    }
}
