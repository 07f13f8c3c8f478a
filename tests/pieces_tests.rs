//! Piece movement and rotation tests

use classic_tetris::core::{shape_offsets, Board, MoveOutcome, PlacedPiece};
use classic_tetris::types::{Cell, Color, ShapeKind};

fn empty_board() -> Board {
    Board::new(20, 10).unwrap()
}

#[test]
fn test_every_shape_spawns_inside_an_empty_board() {
    let board = empty_board();
    for kind in ShapeKind::ALL {
        let piece = PlacedPiece::spawn(kind);
        assert!(piece.fits(&board), "{:?} should fit at spawn", kind);
        assert_eq!(piece.origin, (0, 4));
        assert_eq!(piece.color(), kind.color());
    }
}

#[test]
fn test_t_spawn_cells() {
    let piece = PlacedPiece::spawn(ShapeKind::T);
    assert_eq!(piece.cells(), [(0, 3), (0, 4), (0, 5), (1, 4)]);
}

#[test]
fn test_shape_table_has_four_distinct_cells() {
    for kind in ShapeKind::ALL {
        let offsets = shape_offsets(kind);
        for (i, a) in offsets.iter().enumerate() {
            for b in &offsets[i + 1..] {
                assert_ne!(a, b, "{:?} repeats an offset", kind);
            }
        }
    }
}

#[test]
fn test_move_left_stops_at_wall() {
    let board = empty_board();
    let mut piece = PlacedPiece::spawn(ShapeKind::I);

    let mut moves = 0;
    while piece.try_move_left(&board) {
        moves += 1;
    }
    // I spans d_col -1..=2, so the origin stops at column 1
    assert_eq!(moves, 3);
    assert_eq!(piece.origin, (0, 1));

    let before = piece;
    assert!(!piece.try_move_left(&board));
    assert_eq!(piece, before);
}

#[test]
fn test_move_right_blocked_by_locked_cell() {
    let mut board = empty_board();
    board.set(0, 7, Cell::Filled(Color::Red));
    let mut piece = PlacedPiece::spawn(ShapeKind::T);

    assert!(piece.try_move_right(&board));
    assert!(!piece.try_move_right(&board));
    assert_eq!(piece.origin, (0, 5));
}

#[test]
fn test_move_down_lands_on_floor() {
    let board = empty_board();
    let mut piece = PlacedPiece::spawn(ShapeKind::O);

    let mut steps = 0;
    while piece.try_move_down(&board) == MoveOutcome::Moved {
        steps += 1;
    }
    assert_eq!(steps, 18);
    assert_eq!(piece.origin, (18, 4));
    assert_eq!(piece.try_move_down(&board), MoveOutcome::Landed);
    assert_eq!(piece.origin, (18, 4));
}

#[test]
fn test_square_never_rotates() {
    let board = empty_board();
    let mut piece = PlacedPiece::at(ShapeKind::O, (5, 4));
    let before = piece;

    assert!(!piece.try_rotate(&board));
    assert_eq!(piece, before);
}

#[test]
fn test_four_rotations_return_to_start() {
    let board = empty_board();
    for kind in [ShapeKind::T, ShapeKind::I, ShapeKind::J, ShapeKind::L, ShapeKind::S, ShapeKind::Z] {
        let mut piece = PlacedPiece::at(kind, (8, 4));
        let start = piece;
        for _ in 0..4 {
            assert!(piece.try_rotate(&board), "{:?} should rotate mid-board", kind);
        }
        assert_eq!(piece, start);
    }
}

#[test]
fn test_t_rotation_offsets() {
    let board = empty_board();
    let mut piece = PlacedPiece::at(ShapeKind::T, (5, 4));
    assert!(piece.try_rotate(&board));
    assert_eq!(piece.offsets, [(-1, 0), (0, 0), (1, 0), (0, -1)]);
}

#[test]
fn test_rotation_rejected_out_of_bounds() {
    let board = empty_board();
    // Rotating the flat I at the top row would put a cell at row -1
    let mut piece = PlacedPiece::spawn(ShapeKind::I);
    let before = piece;
    assert!(!piece.try_rotate(&board));
    assert_eq!(piece, before);
}

#[test]
fn test_rotation_rejected_by_locked_cell() {
    let mut board = empty_board();
    board.set(4, 4, Cell::Filled(Color::Black));
    let mut piece = PlacedPiece::at(ShapeKind::T, (5, 4));
    let before = piece;

    // The rotated T needs (4, 4)
    assert!(!piece.try_rotate(&board));
    assert_eq!(piece, before);
}
