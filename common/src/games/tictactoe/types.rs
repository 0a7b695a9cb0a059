use std::fmt;

use serde::{Deserialize, Serialize};

pub const EMPTY_CELL: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
    Empty,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => EMPTY_CELL,
        }
    }

    /// Stray characters map to `None`; they count as neither mark.
    pub fn from_char(cell: char) -> Option<Mark> {
        match cell {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            EMPTY_CELL => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 1-based board coordinates as typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    pub row: i32,
    pub col: i32,
}

impl Coordinates {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    GameNotFinished,
    Draw,
    XWins,
    OWins,
    Impossible,
}

impl GameState {
    pub fn label(self) -> &'static str {
        match self {
            GameState::GameNotFinished => "Game not finished",
            GameState::Draw => "Draw",
            GameState::XWins => "X wins",
            GameState::OWins => "O wins",
            GameState::Impossible => "Impossible",
        }
    }

    pub fn is_finished(self) -> bool {
        self != GameState::GameNotFinished
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 0-based line that completed a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinningLine {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl fmt::Display for WinningLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinningLine::Row(row) => write!(f, "row {}", row + 1),
            WinningLine::Column(col) => write!(f, "column {}", col + 1),
            WinningLine::MainDiagonal => write!(f, "main diagonal"),
            WinningLine::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstMoveMode {
    #[default]
    AlwaysX,
    FromCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkCounts {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}
