use std::fmt;

use super::types::{Coordinates, EMPTY_CELL, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    NotNumeric,
    OutOfRange { grid_dim: usize },
    Occupied,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotNumeric => write!(f, "You should enter numbers!"),
            MoveError::OutOfRange { grid_dim } => {
                write!(f, "Coordinates should be from 1 to {}!", grid_dim)
            }
            MoveError::Occupied => write!(f, "This cell is occupied! Choose another one!"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Expects exactly two integers separated by a single space.
pub fn parse_coordinates(text: &str) -> Option<Coordinates> {
    let tokens: Vec<&str> = text.trim().split(' ').collect();
    if tokens.len() != 2 {
        return None;
    }

    let row = tokens[0].parse::<i32>().ok()?;
    let col = tokens[1].parse::<i32>().ok()?;
    Some(Coordinates::new(row, col))
}

pub fn is_valid_coordinates(coords: Coordinates, grid_dim: usize) -> bool {
    let in_range = |value: i32| value >= 1 && (value as i64) <= grid_dim as i64;
    in_range(coords.row) && in_range(coords.col)
}

/// Unvalidated coordinates produce an index past the end of the board.
pub fn cell_index(coords: Coordinates, grid_dim: usize) -> usize {
    let row = (coords.row as i64).wrapping_sub(1);
    let col = (coords.col as i64).wrapping_sub(1);
    row.wrapping_mul(grid_dim as i64).wrapping_add(col) as usize
}

pub fn apply_move(board: &mut [char], coords: Coordinates, mark: Mark, grid_dim: usize) -> bool {
    let index = cell_index(coords, grid_dim);
    match board.get_mut(index) {
        Some(cell) if *cell == EMPTY_CELL => {
            *cell = mark.to_char();
            true
        }
        _ => false,
    }
}

/// Runs the checks in prompt order: parse, bounds, occupancy.
pub fn validate_move(board: &[char], text: &str, grid_dim: usize) -> Result<Coordinates, MoveError> {
    let coords = parse_coordinates(text).ok_or(MoveError::NotNumeric)?;

    if !is_valid_coordinates(coords, grid_dim) {
        return Err(MoveError::OutOfRange { grid_dim });
    }

    match board.get(cell_index(coords, grid_dim)) {
        Some(&EMPTY_CELL) => Ok(coords),
        _ => Err(MoveError::Occupied),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_parse_coordinates_accepts_two_numbers() {
        assert_eq!(parse_coordinates("2 2"), Some(Coordinates::new(2, 2)));
        assert_eq!(parse_coordinates("  1 3\n"), Some(Coordinates::new(1, 3)));
        assert_eq!(parse_coordinates("-1 7"), Some(Coordinates::new(-1, 7)));
    }

    #[test]
    fn test_parse_coordinates_rejects_non_numeric() {
        assert_eq!(parse_coordinates("a b"), None);
        assert_eq!(parse_coordinates("1 b"), None);
        assert_eq!(parse_coordinates("1.5 2"), None);
    }

    #[test]
    fn test_parse_coordinates_rejects_wrong_token_count() {
        assert_eq!(parse_coordinates("1"), None);
        assert_eq!(parse_coordinates(""), None);
        assert_eq!(parse_coordinates("1 2 3"), None);
        assert_eq!(parse_coordinates("1  2"), None);
    }

    #[test]
    fn test_is_valid_coordinates_bounds() {
        assert!(!is_valid_coordinates(Coordinates::new(0, 2), 3));
        assert!(is_valid_coordinates(Coordinates::new(3, 3), 3));
        assert!(is_valid_coordinates(Coordinates::new(1, 1), 3));
        assert!(!is_valid_coordinates(Coordinates::new(4, 1), 3));
        assert!(!is_valid_coordinates(Coordinates::new(2, -1), 3));
    }

    #[test]
    fn test_cell_index_is_row_major() {
        assert_eq!(cell_index(Coordinates::new(1, 1), 3), 0);
        assert_eq!(cell_index(Coordinates::new(1, 3), 3), 2);
        assert_eq!(cell_index(Coordinates::new(2, 1), 3), 3);
        assert_eq!(cell_index(Coordinates::new(3, 3), 3), 8);
        assert_eq!(cell_index(Coordinates::new(2, 3), 4), 6);
    }

    #[test]
    fn test_cell_index_out_of_range_is_past_end() {
        assert!(cell_index(Coordinates::new(4, 1), 3) >= 9);
        assert!(cell_index(Coordinates::new(0, 0), 3) >= 9);
    }

    #[test]
    fn test_cell_index_huge_grid_does_not_panic() {
        let _ = cell_index(Coordinates::new(i32::MAX, i32::MAX), usize::MAX);
        let _ = cell_index(Coordinates::new(i32::MIN, i32::MIN), usize::MAX / 2);
        let mut board = vec![EMPTY_CELL; 9];
        assert!(!apply_move(&mut board, Coordinates::new(i32::MAX, 1), Mark::X, usize::MAX));
        assert_eq!(board, vec![EMPTY_CELL; 9]);
    }

    #[test]
    fn test_apply_move_on_empty_cell_changes_one_cell() {
        let mut board = cells("X_O______");
        let before = board.clone();
        assert!(apply_move(&mut board, Coordinates::new(1, 2), Mark::O, 3));
        let changed: Vec<usize> = (0..9).filter(|&i| board[i] != before[i]).collect();
        assert_eq!(changed, vec![1]);
        assert_eq!(board[1], 'O');
    }

    #[test]
    fn test_apply_move_on_occupied_cell_leaves_board_unchanged() {
        let mut board = cells("X_O______");
        let before = board.clone();
        assert!(!apply_move(&mut board, Coordinates::new(1, 1), Mark::O, 3));
        assert!(!apply_move(&mut board, Coordinates::new(1, 3), Mark::X, 3));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_outside_board_is_rejected() {
        let mut board = cells("_________");
        assert!(!apply_move(&mut board, Coordinates::new(4, 4), Mark::X, 3));
        assert!(!apply_move(&mut board, Coordinates::new(0, 1), Mark::X, 3));
        assert_eq!(board, cells("_________"));
    }

    #[test]
    fn test_validate_move_order_of_checks() {
        let board = cells("X________");
        assert_eq!(validate_move(&board, "one two", 3), Err(MoveError::NotNumeric));
        assert_eq!(validate_move(&board, "4 1", 3), Err(MoveError::OutOfRange { grid_dim: 3 }));
        assert_eq!(validate_move(&board, "1 1", 3), Err(MoveError::Occupied));
        assert_eq!(validate_move(&board, "2 2", 3), Ok(Coordinates::new(2, 2)));
    }

    #[test]
    fn test_stray_char_cell_is_occupied() {
        let board = cells("?________");
        assert_eq!(validate_move(&board, "1 1", 3), Err(MoveError::Occupied));
    }

    #[test]
    fn test_move_error_messages() {
        assert_eq!(MoveError::NotNumeric.to_string(), "You should enter numbers!");
        assert_eq!(
            MoveError::OutOfRange { grid_dim: 3 }.to_string(),
            "Coordinates should be from 1 to 3!"
        );
        assert_eq!(
            MoveError::Occupied.to_string(),
            "This cell is occupied! Choose another one!"
        );
    }
}
