use super::types::{EMPTY_CELL, GameState, Mark, MarkCounts, WinningLine};

pub fn count_marks(board: &[char]) -> MarkCounts {
    board.iter().fold(MarkCounts::default(), |mut counts, &cell| {
        match cell {
            'X' => counts.x += 1,
            'O' => counts.o += 1,
            EMPTY_CELL => counts.empty += 1,
            _ => {}
        }
        counts
    })
}

pub fn classify(board: &[char], grid_dim: usize) -> GameState {
    let counts = count_marks(board);

    if counts.x.abs_diff(counts.o) > 1 {
        return GameState::Impossible;
    }

    let x_wins = is_winning(board, Mark::X, grid_dim);
    let o_wins = is_winning(board, Mark::O, grid_dim);

    match (x_wins, o_wins) {
        (true, true) => GameState::Impossible,
        (true, false) => GameState::XWins,
        (false, true) => GameState::OWins,
        (false, false) if counts.empty == 0 => GameState::Draw,
        (false, false) => GameState::GameNotFinished,
    }
}

pub fn is_winning(board: &[char], mark: Mark, grid_dim: usize) -> bool {
    winning_line(board, mark, grid_dim).is_some()
}

/// First completed line for `mark`, checked rows, columns, main diagonal, anti-diagonal.
pub fn winning_line(board: &[char], mark: Mark, grid_dim: usize) -> Option<WinningLine> {
    if grid_dim == 0 || mark == Mark::Empty {
        return None;
    }
    let symbol = mark.to_char();

    if let Some(row) = (0..grid_dim).find(|&row| check_row(board, row, symbol, grid_dim)) {
        return Some(WinningLine::Row(row));
    }
    if let Some(col) = (0..grid_dim).find(|&col| check_column(board, col, symbol, grid_dim)) {
        return Some(WinningLine::Column(col));
    }
    if check_main_diagonal(board, symbol, grid_dim) {
        return Some(WinningLine::MainDiagonal);
    }
    if check_anti_diagonal(board, symbol, grid_dim) {
        return Some(WinningLine::AntiDiagonal);
    }

    None
}

fn cell_is(board: &[char], index: usize, symbol: char) -> bool {
    board.get(index) == Some(&symbol)
}

fn check_row(board: &[char], row: usize, symbol: char, grid_dim: usize) -> bool {
    (0..grid_dim).all(|col| cell_is(board, row * grid_dim + col, symbol))
}

fn check_column(board: &[char], col: usize, symbol: char, grid_dim: usize) -> bool {
    (0..grid_dim).all(|row| cell_is(board, row * grid_dim + col, symbol))
}

fn check_main_diagonal(board: &[char], symbol: char, grid_dim: usize) -> bool {
    (0..grid_dim).all(|i| cell_is(board, i * grid_dim + i, symbol))
}

fn check_anti_diagonal(board: &[char], symbol: char, grid_dim: usize) -> bool {
    (0..grid_dim).all(|i| cell_is(board, i * grid_dim + (grid_dim - 1 - i), symbol))
}
