//! Shape catalog and rotation tests

use tui_blockfall::core::{rotate_cw, shape_of, Shape};
use tui_blockfall::types::PieceKind;

#[test]
fn test_catalog_matrices() {
    let rows = |kind| shape_of(kind).to_strings();
    assert_eq!(rows(PieceKind::I), vec!["####"]);
    assert_eq!(rows(PieceKind::O), vec!["##", "##"]);
    assert_eq!(rows(PieceKind::T), vec![".#.", "###"]);
    assert_eq!(rows(PieceKind::J), vec!["#..", "###"]);
    assert_eq!(rows(PieceKind::L), vec!["..#", "###"]);
    assert_eq!(rows(PieceKind::S), vec![".##", "##."]);
    assert_eq!(rows(PieceKind::Z), vec!["##.", ".##"]);
}

#[test]
fn test_every_piece_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(shape_of(kind).filled_cells().len(), 4, "{kind:?}");
    }
}

#[test]
fn test_four_rotations_restore_shape() {
    for kind in PieceKind::ALL {
        let original = shape_of(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape = rotate_cw(&shape);
        }
        assert_eq!(shape, original, "{kind:?}");
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let shape = shape_of(kind);
        let rotated = rotate_cw(&shape);
        assert_eq!(rotated.width(), shape.height());
        assert_eq!(rotated.height(), shape.width());
    }
}

#[test]
fn test_rotate_t_clockwise() {
    let t = shape_of(PieceKind::T);
    assert_eq!(rotate_cw(&t).to_strings(), vec!["#.", "##", "#."]);
    assert_eq!(rotate_cw(&rotate_cw(&t)).to_strings(), vec!["###", ".#."]);
}

#[test]
fn test_rotation_does_not_mutate_input() {
    let i = shape_of(PieceKind::I);
    let vertical = rotate_cw(&i);
    assert_eq!(i.to_strings(), vec!["####"]);
    assert_eq!(vertical.to_strings(), vec!["#", "#", "#", "#"]);
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert!(Shape::from_rows(&[]).is_none());
    assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
    assert_eq!(
        Shape::from_rows(&[&[1, 1], &[1, 1]]),
        Some(shape_of(PieceKind::O))
    );
}
