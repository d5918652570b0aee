//! The falling piece: a shape, its color, and the grid position of its top-left corner.

use crate::shape::Shape;
use crate::types::Rgb;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub color: Rgb,
    /// Origin column
    pub x: i16,
    /// Origin row
    pub y: i16,
}

impl ActivePiece {
    pub fn new(shape: Shape, color: Rgb, x: i16, y: i16) -> Self {
        Self { shape, color, x, y }
    }

    /// Place a shape on row 0, centered horizontally (rounding toward the left)
    pub fn spawn(shape: Shape, color: Rgb, cols: u16) -> Self {
        let x = (cols as i16 - shape.width() as i16).div_euclid(2);
        Self::new(shape, color, x, 0)
    }

    /// Absolute grid positions of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    #[test]
    fn spawn_centers_with_floor() {
        let color = Rgb::new(1, 2, 3);
        let i = ActivePiece::spawn(Shape::for_kind(ShapeKind::I), color, 10);
        assert_eq!((i.x, i.y), (3, 0));

        let j = ActivePiece::spawn(Shape::for_kind(ShapeKind::J), color, 10);
        assert_eq!(j.x, 3);

        let o = ActivePiece::spawn(Shape::for_kind(ShapeKind::O), color, 9);
        assert_eq!(o.x, 3);
    }

    #[test]
    fn cells_are_offset_by_origin() {
        let o = ActivePiece::new(Shape::for_kind(ShapeKind::O), Rgb::default(), 4, 7);
        let cells: Vec<_> = o.cells().collect();
        assert_eq!(cells, vec![(4, 7), (5, 7), (4, 8), (5, 8)]);
    }
}
