mod board;
mod game_state;
mod move_validator;
mod state_evaluator;
mod types;

pub use board::Board;
pub use game_state::TicTacToeGame;
pub use move_validator::{
    MoveError, apply_move, cell_index, is_valid_coordinates, parse_coordinates, validate_move,
};
pub use state_evaluator::{classify, count_marks, is_winning, winning_line};
pub use types::{Coordinates, EMPTY_CELL, FirstMoveMode, GameState, Mark, MarkCounts, WinningLine};
