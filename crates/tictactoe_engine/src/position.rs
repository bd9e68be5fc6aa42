//! Board coordinates for tic-tac-toe moves.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell on the board, addressed as `(row, col)` with both in `0..3`.
///
/// Row-major index 0-8 is the alternate addressing used for display
/// and command-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Error building a [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PositionError {
    /// Row or column outside `0..3`.
    #[display("Position ({}, {}) is off the board", _0, _1)]
    OutOfBounds(u8, u8),

    /// Row-major index outside `0..9`.
    #[display("Index {} is off the board (must be 0-8)", _0)]
    IndexOutOfBounds(usize),

    /// Text that is neither `row,col` nor an index.
    #[display("Cannot parse position from {:?}", _0)]
    Unparseable(String),
}

impl std::error::Error for PositionError {}

impl Position {
    /// Top-left corner.
    pub const TOP_LEFT: Position = Position { row: 0, col: 0 };
    /// Center cell.
    pub const CENTER: Position = Position { row: 1, col: 1 };
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Position = Position { row: 2, col: 2 };

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position, rejecting coordinates off the board.
    #[instrument]
    pub fn new(row: u8, col: u8) -> Result<Self, PositionError> {
        if row < 3 && col < 3 {
            Ok(Self { row, col })
        } else {
            Err(PositionError::OutOfBounds(row, col))
        }
    }

    /// Creates a position from its row-major index.
    #[instrument]
    pub fn from_index(index: usize) -> Result<Self, PositionError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(PositionError::IndexOutOfBounds(index))
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = PositionError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parses `row,col` or a row-major index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse::<u8>();
            let col = col.trim().parse::<u8>();
            return match (row, col) {
                (Ok(row), Ok(col)) => Self::new(row, col),
                _ => Err(PositionError::Unparseable(s.to_string())),
            };
        }
        s.parse::<usize>()
            .map_err(|_| PositionError::Unparseable(s.to_string()))
            .and_then(Self::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}
