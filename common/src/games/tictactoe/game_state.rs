use super::board::Board;
use super::move_validator::{MoveError, validate_move};
use super::state_evaluator::{count_marks, winning_line};
use super::types::{Coordinates, FirstMoveMode, GameState, Mark, WinningLine};

#[derive(Debug)]
pub struct TicTacToeGame {
    board: Board,
    current_mark: Mark,
    status: GameState,
    last_move: Option<Coordinates>,
}

impl TicTacToeGame {
    pub fn new(board: Board, first_move_mode: FirstMoveMode) -> Self {
        let current_mark = match first_move_mode {
            FirstMoveMode::AlwaysX => Mark::X,
            FirstMoveMode::FromCounts => {
                let counts = count_marks(board.cells());
                if counts.x > counts.o { Mark::O } else { Mark::X }
            }
        };
        let status = board.classify();

        Self {
            board,
            current_mark,
            status,
            last_move: None,
        }
    }

    /// Validates and applies one move from raw prompt text.
    pub fn play(&mut self, text: &str) -> Result<GameState, MoveError> {
        if self.status.is_finished() {
            return Ok(self.status);
        }

        let coords = validate_move(self.board.cells(), text, self.board.grid_dim())?;
        if !self.board.apply_move(coords, self.current_mark) {
            return Err(MoveError::Occupied);
        }
        self.last_move = Some(coords);

        self.status = self.board.classify();
        self.switch_turn();

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameState {
        self.status
    }

    pub fn last_move(&self) -> Option<Coordinates> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<(Mark, WinningLine)> {
        let mark = match self.status {
            GameState::XWins => Mark::X,
            GameState::OWins => Mark::O,
            _ => return None,
        };
        winning_line(self.board.cells(), mark, self.board.grid_dim()).map(|line| (mark, line))
    }
}
