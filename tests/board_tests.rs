//! Board tests

use classic_tetris::core::{Board, GameError};
use classic_tetris::types::{Cell, Color, BOARD_COLUMNS, BOARD_ROWS};

fn fill_row(board: &mut Board, row: i32) {
    for col in 0..board.columns() {
        board.set(row, col, Cell::Filled(Color::Green));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_ROWS, BOARD_COLUMNS).unwrap();
    assert_eq!(board.rows(), 20);
    assert_eq!(board.columns(), 10);

    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLUMNS {
            assert_eq!(board.get(row, col), Some(Cell::Empty));
            assert!(!board.is_occupied(row, col));
        }
    }
}

#[test]
fn test_board_rejects_empty_dimensions() {
    assert_eq!(
        Board::new(0, 10),
        Err(GameError::InvalidDimensions { rows: 0, columns: 10 })
    );
    assert!(Board::new(20, -1).is_err());
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new(20, 10).unwrap();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, 10), None);
    assert_eq!(board.get(20, 0), None);
    assert!(!board.set(0, -1, Cell::Filled(Color::Red)));
    assert!(board.is_out_of_bounds(20, 0));
    assert!(board.is_out_of_bounds(0, -1));
    assert!(!board.is_out_of_bounds(19, 9));
    // Out-of-bounds cells never count as occupied
    assert!(!board.is_occupied(-1, 0));
}

#[test]
fn test_board_place_and_clear() {
    let mut board = Board::new(20, 10).unwrap();
    board.place(&[(19, 0), (19, 1), (18, 0), (18, 1)], Color::Blue);

    assert_eq!(board.get(18, 1), Some(Cell::Filled(Color::Blue)));
    assert_eq!(board.occupied_count(), 4);

    board.clear();
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_clear_without_full_rows_changes_nothing() {
    let mut board = Board::new(20, 10).unwrap();
    for col in 0..9 {
        board.set(19, col, Cell::Filled(Color::Red));
    }
    let before = board.clone();

    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_bottom_rows_shifts_content_down() {
    let mut board = Board::new(20, 10).unwrap();
    fill_row(&mut board, 19);
    fill_row(&mut board, 18);
    board.set(17, 3, Cell::Filled(Color::Magenta));

    assert_eq!(board.clear_full_lines(), 2);
    assert_eq!(board.get(19, 3), Some(Cell::Filled(Color::Magenta)));
    assert_eq!(board.occupied_count(), 1);
    assert!(!board.is_row_full(19));
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new(20, 10).unwrap();
    fill_row(&mut board, 19);
    board.set(18, 0, Cell::Filled(Color::Yellow));
    fill_row(&mut board, 17);
    board.set(16, 9, Cell::Filled(Color::Cyan));

    assert_eq!(board.clear_full_lines(), 2);
    assert_eq!(board.get(19, 0), Some(Cell::Filled(Color::Yellow)));
    assert_eq!(board.get(18, 9), Some(Cell::Filled(Color::Cyan)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_cleared_count_matches_removed_cells() {
    let mut board = Board::new(20, 10).unwrap();
    for row in 15..20 {
        fill_row(&mut board, row);
    }
    board.set(14, 4, Cell::Filled(Color::Black));
    let before = board.occupied_count();

    let cleared = board.clear_full_lines();
    assert_eq!(cleared, 5);
    assert_eq!(before - board.occupied_count(), cleared as usize * 10);
    for row in 0..20 {
        assert!(!board.is_row_full(row));
    }
}
