//! Occupancy grid and line clearance tests

use tui_blockfall::core::{clear_lines, line_clear_points, Board};
use tui_blockfall::types::{DEFAULT_COLS, DEFAULT_ROWS};

fn board_from(rows: &[&str]) -> Board {
    let mut board = Board::new(rows.len() as u8, rows[0].len() as u8);
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            if ch == '#' {
                board.set(r as i8, c as i8);
            }
        }
    }
    board
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.rows(), DEFAULT_ROWS);
    assert_eq!(board.cols(), DEFAULT_COLS);
    assert_eq!(board.cells().len(), 180);
    assert_eq!(board.filled_count(), 0);

    for row in 0..DEFAULT_ROWS as i8 {
        for col in 0..DEFAULT_COLS as i8 {
            assert_eq!(board.get(row, col), Some(false), "({row}, {col}) should be empty");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(4, 6);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(4, 0), None);
    assert_eq!(board.get(0, 6), None);
    assert_eq!(board.row(4), None);
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new(4, 4);

    assert!(!board.set(-1, 0));
    assert!(!board.set(0, 4));
    assert!(board.set(3, 3));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_single_full_row_is_cleared() {
    let mut board = board_from(&["....", "#...", ".#..", "####"]);

    let result = clear_lines(&mut board, 10);
    assert_eq!(result.lines, 1);
    assert_eq!(result.points, 10);
    assert_eq!(board.to_strings(), vec!["....", "....", "#...", ".#.."]);
}

#[test]
fn test_no_full_rows_leaves_board_alone() {
    let mut board = board_from(&["....", "#...", ".#..", "###."]);
    let before = board.clone();

    let result = clear_lines(&mut board, 10);
    assert_eq!((result.lines, result.points), (0, 0));
    assert_eq!(board, before);
}

#[test]
fn test_stacked_full_rows_are_all_cleared() {
    let mut board = board_from(&["#...", "####", "####", "####"]);

    let result = clear_lines(&mut board, 10);
    assert_eq!(result.lines, 3);
    assert_eq!(result.points, 30);
    assert_eq!(board.to_strings(), vec!["....", "....", "....", "#..."]);
}

#[test]
fn test_full_board_clears_completely() {
    let mut board = board_from(&["####", "####", "####", "####"]);

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_reward_is_linear_in_lines() {
    assert_eq!(line_clear_points(0, 10), 0);
    assert_eq!(line_clear_points(1, 10), 10);
    assert_eq!(line_clear_points(4, 10), 40);
    assert_eq!(line_clear_points(2, 25), 50);
    assert_eq!(line_clear_points(u32::MAX, 10), u32::MAX);
}

#[test]
fn test_clear_resets_every_cell() {
    let mut board = board_from(&["#..#", "....", ".##.", "...."]);
    board.clear();
    assert_eq!(board, Board::new(4, 4));
}

#[test]
fn test_zero_width_board_has_nothing_to_clear() {
    let mut board = Board::new(4, 0);
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(clear_lines(&mut board, 10).lines, 0);
}
