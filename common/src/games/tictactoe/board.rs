use std::fmt;

use super::move_validator::apply_move;
use super::state_evaluator::classify;
use super::types::{Coordinates, EMPTY_CELL, GameState, Mark};

/// Flat row-major cells of a square grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<char>,
    grid_dim: usize,
}

impl Board {
    pub fn parse(line: &str, strict_cells: bool) -> Result<Self, String> {
        let cells: Vec<char> = line.trim().chars().collect();
        if cells.is_empty() {
            return Err("Board must not be empty".to_string());
        }

        let grid_dim = cells.len().isqrt();
        if grid_dim * grid_dim != cells.len() {
            return Err(format!(
                "Board length {} is not a perfect square",
                cells.len()
            ));
        }

        if strict_cells
            && let Some(bad) = cells.iter().find(|&&cell| Mark::from_char(cell).is_none())
        {
            return Err(format!("Unexpected cell '{}', expected X, O or _", bad));
        }

        Ok(Self { cells, grid_dim })
    }

    pub fn empty(grid_dim: usize) -> Self {
        Self {
            cells: vec![EMPTY_CELL; grid_dim * grid_dim],
            grid_dim,
        }
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    pub fn grid_dim(&self) -> usize {
        self.grid_dim
    }

    pub fn classify(&self) -> GameState {
        classify(&self.cells, self.grid_dim)
    }

    pub fn apply_move(&mut self, coords: Coordinates, mark: Mark) -> bool {
        apply_move(&mut self.cells, coords, mark, self.grid_dim)
    }

    pub fn available_cells(&self) -> Vec<Coordinates> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == EMPTY_CELL)
            .map(|(index, _)| {
                Coordinates::new(
                    (index / self.grid_dim) as i32 + 1,
                    (index % self.grid_dim) as i32 + 1,
                )
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(2 * self.grid_dim + 3);
        writeln!(f, "{}", border)?;
        for row in self.cells.chunks(self.grid_dim.max(1)) {
            write!(f, "| ")?;
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{}", border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_infers_grid_dim() {
        let board = Board::parse("XO_XO_X__", false).unwrap();
        assert_eq!(board.grid_dim(), 3);
        assert_eq!(board.cells().len(), 9);

        let board = Board::parse("  ________________ \n", false).unwrap();
        assert_eq!(board.grid_dim(), 4);
    }

    #[test]
    fn test_parse_rejects_non_square_length() {
        assert!(Board::parse("XO_XO", false).is_err());
        assert!(Board::parse("", false).is_err());
        assert!(Board::parse("   ", false).is_err());
    }

    #[test]
    fn test_parse_permissive_keeps_stray_chars() {
        let board = Board::parse("X?O______", false).unwrap();
        assert_eq!(board.cells()[1], '?');
    }

    #[test]
    fn test_parse_strict_rejects_stray_chars() {
        let result = Board::parse("X?O______", true);
        assert_eq!(result, Err("Unexpected cell '?', expected X, O or _".to_string()));
        assert!(Board::parse("X_O______", true).is_ok());
    }

    #[test]
    fn test_display_matches_console_layout() {
        let board = Board::parse("XO_XO_X__", false).unwrap();
        let expected = "---------\n\
                        | X O _ |\n\
                        | X O _ |\n\
                        | X _ _ |\n\
                        ---------";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_display_border_scales_with_grid() {
        let board = Board::empty(4);
        let rendered = board.to_string();
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "-----------");
        assert_eq!(rendered.lines().count(), 6);
    }

    #[test]
    fn test_available_cells_are_one_based() {
        let board = Board::parse("XOXO_OXOX", false).unwrap();
        assert_eq!(board.available_cells(), vec![Coordinates::new(2, 2)]);
        assert_eq!(Board::empty(2).available_cells().len(), 4);
    }

    #[test]
    fn test_constructed_boards_are_square() {
        for line in ["X", "XO_X", "_________", "XOXOXOXOXOXOXOXO"] {
            let board = Board::parse(line, false).unwrap();
            assert_eq!(board.cells().len(), board.grid_dim() * board.grid_dim());
        }
        for grid_dim in 0..5 {
            let board = Board::empty(grid_dim);
            assert_eq!(board.cells().len(), grid_dim * grid_dim);
        }
    }

    #[test]
    fn test_zero_sized_board_has_no_available_cells() {
        let board = Board::empty(0);
        assert!(board.available_cells().is_empty());
        assert_eq!(board.to_string(), "---\n---");
    }

    #[test]
    fn test_apply_move_and_classify() {
        let mut board = Board::parse("XX_OO____", false).unwrap();
        assert_eq!(board.classify(), GameState::GameNotFinished);
        assert!(board.apply_move(Coordinates::new(1, 3), Mark::X));
        assert_eq!(board.classify(), GameState::XWins);
        assert!(!board.apply_move(Coordinates::new(1, 3), Mark::O));
    }
}
