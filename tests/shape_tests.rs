//! Shape tests - occupancy tables and rotation

use tui_blockfall::core::Shape;
use tui_blockfall::types::ShapeKind;

#[test]
fn test_spawn_shapes() {
    let rows = |k| Shape::for_kind(k).to_rows();

    assert_eq!(rows(ShapeKind::I), vec![vec![1, 1, 1, 1]]);
    assert_eq!(rows(ShapeKind::O), vec![vec![1, 1], vec![1, 1]]);
    assert_eq!(rows(ShapeKind::S), vec![vec![1, 1, 1], vec![0, 1, 0]]);
    assert_eq!(rows(ShapeKind::J), vec![vec![1, 1, 1], vec![1, 0, 0]]);
    assert_eq!(rows(ShapeKind::L), vec![vec![1, 1, 1], vec![0, 0, 1]]);
}

#[test]
fn test_four_clockwise_rotations_are_identity() {
    for kind in ShapeKind::ALL {
        let shape = Shape::for_kind(kind);
        let back = shape.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_counter_clockwise_is_three_clockwise_steps() {
    for kind in ShapeKind::ALL {
        let shape = Shape::for_kind(kind);
        assert_eq!(
            shape.rotate(false),
            shape.rotate_cw().rotate_cw().rotate_cw(),
            "{:?}",
            kind
        );
        assert_eq!(shape.rotate(true), shape.rotate_cw());
    }
}

#[test]
fn test_rotation_swaps_dimensions_and_keeps_cell_count() {
    for kind in ShapeKind::ALL {
        let shape = Shape::for_kind(kind);
        let r = shape.rotate_cw();
        assert_eq!(r.width(), shape.height());
        assert_eq!(r.height(), shape.width());
        assert_eq!(r.cells().len(), shape.cells().len());
    }
}

#[test]
fn test_l_shape_quarter_turns() {
    let l = Shape::for_kind(ShapeKind::L);

    let cw = l.rotate_cw();
    assert_eq!(cw.to_rows(), vec![vec![0, 1], vec![0, 1], vec![1, 1]]);

    let half = cw.rotate_cw();
    assert_eq!(half.to_rows(), vec![vec![1, 0, 0], vec![1, 1, 1]]);

    let ccw = l.rotate(false);
    assert_eq!(ccw.to_rows(), vec![vec![1, 1], vec![1, 0], vec![1, 0]]);
}

#[test]
fn test_o_shape_is_rotation_invariant() {
    let o = Shape::for_kind(ShapeKind::O);
    assert_eq!(o.rotate_cw(), o);
}

#[test]
fn test_every_shape_fits_a_four_by_four_box() {
    for kind in ShapeKind::ALL {
        let mut shape = Shape::for_kind(kind);
        for _ in 0..4 {
            assert!(shape.width() <= 4 && shape.height() <= 4);
            shape = shape.rotate_cw();
        }
    }
}
