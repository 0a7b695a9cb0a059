use std::io::{BufRead, Write};

use common::games::tictactoe::{Board, GameState, TicTacToeGame};
use common::log;

use crate::config::BoardConfig;

const INIT_PROMPT: &str = "Enter init state > ";
const MOVE_PROMPT: &str = "Enter the coordinates: ";

/// Plays one game: reads the initial board, then prompts for moves until a terminal state.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    settings: &BoardConfig,
) -> Result<GameState, String> {
    writeln!(output, "{}", INIT_PROMPT).map_err(write_error)?;
    let line = read_line(&mut input)?;
    let board = Board::parse(&line, settings.strict_cells)?;
    if board.grid_dim() > settings.max_grid_dim {
        return Err(format!(
            "Board is {0}x{0}, the maximum is {1}x{1}",
            board.grid_dim(),
            settings.max_grid_dim
        ));
    }
    log!("Loaded {0}x{0} board", board.grid_dim());

    writeln!(output, "{}", board).map_err(write_error)?;

    let mut game = TicTacToeGame::new(board, settings.first_move);
    while !game.status().is_finished() {
        write!(output, "{}", MOVE_PROMPT).map_err(write_error)?;
        output.flush().map_err(write_error)?;

        let text = read_line(&mut input)?;
        let mark = game.current_mark();
        match game.play(&text) {
            Ok(state) => {
                if let Some(coords) = game.last_move() {
                    log!("{} placed at {}, state: {}", mark, coords, state);
                }
                writeln!(output, "{}", game.board()).map_err(write_error)?;
            }
            Err(err) => {
                log!("Rejected move {:?}: {:?}", text.trim(), err);
                log!("{} free cells: {}", mark, free_cells(game.board()));
                writeln!(output, "{}", err).map_err(write_error)?;
            }
        }
    }

    if let Some((mark, line)) = game.winning_line() {
        log!("{} completed the {}", mark, line);
    }
    writeln!(output, "{}", game.status()).map_err(write_error)?;
    Ok(game.status())
}

fn free_cells(board: &Board) -> String {
    board
        .available_cells()
        .iter()
        .map(|coords| format!("{} {}", coords.row, coords.col))
        .collect::<Vec<_>>()
        .join(", ")
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, String> {
    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if bytes == 0 {
        return Err("Unexpected end of input".to_string());
    }
    Ok(line)
}

fn write_error(err: std::io::Error) -> String {
    format!("Failed to write output: {}", err)
}
