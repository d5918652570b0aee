//! Shape module - occupancy patterns and 90° rotation
//!
//! A shape is a small boolean matrix (at most 4x4). Rotation is a single clockwise
//! primitive (transpose, then reverse the row order); counter-clockwise rotation is
//! three clockwise steps.

use arrayvec::ArrayVec;

use crate::types::{ShapeKind, MAX_SHAPE_EXTENT};

const EXTENT: usize = MAX_SHAPE_EXTENT as usize;

/// Offset of a single occupied cell relative to the shape's top-left corner
pub type CellOffset = (i16, i16);

/// Occupied offsets of a shape (never more than 16)
pub type ShapeCells = ArrayVec<CellOffset, 16>;

/// A 2D occupancy pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Row-major occupancy with a fixed stride of 4
    filled: [bool; EXTENT * EXTENT],
}

impl Shape {
    /// Build a shape from rows of 0/1 flags.
    ///
    /// Rows longer than 4 cells, or more than 4 rows, are truncated. Short rows are
    /// padded with empty cells up to the width of the first row.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len().min(EXTENT);
        let width = rows.first().map(|r| r.len()).unwrap_or(0).min(EXTENT);
        let mut filled = [false; EXTENT * EXTENT];
        for (y, row) in rows.iter().take(height).enumerate() {
            for (x, &v) in row.iter().take(width).enumerate() {
                filled[y * EXTENT + x] = v != 0;
            }
        }
        Self {
            width: width as u8,
            height: height as u8,
            filled,
        }
    }

    /// Spawn orientation for a shape kind
    pub fn for_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            ShapeKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            ShapeKind::S => Self::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
            ShapeKind::J => Self::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
            ShapeKind::L => Self::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        }
    }

    /// Number of columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Occupancy at (dx, dy); false outside the shape's box
    pub fn is_filled(&self, dx: usize, dy: usize) -> bool {
        dx < self.width as usize && dy < self.height as usize && self.filled[dy * EXTENT + dx]
    }

    /// Occupied offsets, row by row
    pub fn cells(&self) -> ShapeCells {
        let mut out = ArrayVec::new();
        for dy in 0..self.height as usize {
            for dx in 0..self.width as usize {
                if self.filled[dy * EXTENT + dx] {
                    out.push((dx as i16, dy as i16));
                }
            }
        }
        out
    }

    /// One 90° clockwise step: transpose, then reverse the row order.
    ///
    /// Row `i` of the result is column `i` of `self` read from bottom to top.
    pub fn rotate_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut filled = [false; EXTENT * EXTENT];
        for i in 0..w {
            for j in 0..h {
                filled[i * EXTENT + j] = self.filled[(h - 1 - j) * EXTENT + i];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            filled,
        }
    }

    /// Rotate by 90° in either direction.
    ///
    /// Counter-clockwise is three clockwise steps.
    pub fn rotate(&self, clockwise: bool) -> Self {
        if clockwise {
            self.rotate_cw()
        } else {
            self.rotate_cw().rotate_cw().rotate_cw()
        }
    }

    /// Rows as 0/1 vectors (for tests and debugging)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|dy| {
                (0..self.width as usize)
                    .map(|dx| self.is_filled(dx, dy) as u8)
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_cw_matches_transpose_then_reverse() {
        let j = Shape::for_kind(ShapeKind::J);
        assert_eq!(j.to_rows(), vec![vec![1, 1, 1], vec![1, 0, 0]]);

        let r = j.rotate_cw();
        assert_eq!(r.width(), 2);
        assert_eq!(r.height(), 3);
        assert_eq!(r.to_rows(), vec![vec![1, 1], vec![0, 1], vec![0, 1]]);
    }

    #[test]
    fn test_i_shape_becomes_vertical() {
        let i = Shape::for_kind(ShapeKind::I).rotate_cw();
        assert_eq!(i.width(), 1);
        assert_eq!(i.height(), 4);
        assert_eq!(i.cells().len(), 4);
    }

    #[test]
    fn test_counter_clockwise_undoes_clockwise() {
        for kind in ShapeKind::ALL {
            let shape = Shape::for_kind(kind);
            assert_eq!(shape.rotate(true).rotate(false), shape, "{:?}", kind);
        }
    }

    #[test]
    fn test_from_rows_ignores_cells_past_extent() {
        let s = Shape::from_rows(&[&[1, 1, 1, 1, 1]]);
        assert_eq!(s.width(), 4);
        assert_eq!(s.cells().len(), 4);
    }
}
