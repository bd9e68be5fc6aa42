//! Core domain types for tic-tac-toe rooms.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Symbol a player claims cells with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mark {
    /// Mark of the first joiner.
    X,
    /// Mark of the second joiner.
    O,
}

/// Turn-order position of a player, fixed at join time.
///
/// Serialized as the bare index `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Slot {
    /// Slot 0, plays `x`.
    #[default]
    First,
    /// Slot 1, plays `o`.
    Second,
}

impl Slot {
    /// Both slots in turn order.
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    /// Index into `players` and `clocks`.
    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    /// Slot for a roster index, if there is one.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Slot::First),
            1 => Some(Slot::Second),
            _ => None,
        }
    }

    /// The slot that moves after this one.
    pub fn other(self) -> Self {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }

    /// Mark played from this slot.
    pub fn mark(self) -> Mark {
        match self {
            Slot::First => Mark::X,
            Slot::Second => Mark::O,
        }
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.index() as u8
    }
}

/// A stored turn index outside `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid turn slot {}, expected 0 or 1", value)]
pub struct InvalidSlot {
    /// The rejected value.
    pub value: u8,
}

impl TryFrom<u8> for Slot {
    type Error = InvalidSlot;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Slot::from_index(value as usize).ok_or(InvalidSlot { value })
    }
}

/// Opaque player identifier (an ephemeral session handle).
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wraps an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrows the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Opaque room identifier, the key of a game record in the store.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Wraps an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh 128-bit hex identifier.
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        let bits: u128 = rng.r#gen();
        Self(format!("{bits:032x}"))
    }

    /// Borrows the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Serialized as three rows of `null | "x" | "o"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: [[Option<Mark>; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    pub fn from_rows(rows: [[Option<Mark>; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Mark at the given position, if any.
    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.rows[pos.row()][pos.col()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Returns a copy of this board with `mark` written at `pos`.
    ///
    /// The receiver is left untouched.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.rows[pos.row()][pos.col()] = Some(mark);
        next
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> &[[Option<Mark>; 3]; 3] {
        &self.rows
    }

    /// Columns, left to right (the transposed rows).
    pub fn columns(&self) -> [[Option<Mark>; 3]; 3] {
        let r = &self.rows;
        [0, 1, 2].map(|col| [r[0][col], r[1][col], r[2][col]])
    }

    /// Main diagonal then anti-diagonal.
    pub fn diagonals(&self) -> [[Option<Mark>; 3]; 2] {
        let r = &self.rows;
        [[r[0][0], r[1][1], r[2][2]], [r[0][2], r[1][1], r[2][0]]]
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(mark))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, "{}", r * 3 + c)?,
                }
                if c < 2 {
                    write!(f, "|")?;
                }
            }
            if r < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_marks_follow_join_order() {
        assert_eq!(Slot::First.mark(), Mark::X);
        assert_eq!(Slot::Second.mark(), Mark::O);
        assert_eq!(Slot::First.other(), Slot::Second);
    }

    #[test]
    fn test_slot_serializes_as_index() {
        assert_eq!(serde_json::to_string(&Slot::Second).unwrap(), "1");
        assert_eq!(serde_json::from_str::<Slot>("0").unwrap(), Slot::First);
        assert!(serde_json::from_str::<Slot>("2").is_err());
    }

    #[test]
    fn test_board_serializes_as_nested_rows() {
        let board = Board::new().with_mark(Position::CENTER, Mark::X);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(
            json,
            r#"[[null,null,null],[null,"x",null],[null,null,null]]"#
        );
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(Position::CENTER, Mark::O);
        assert!(board.is_empty(Position::CENTER));
        assert_eq!(next.get(Position::CENTER), Some(Mark::O));
    }

    #[test]
    fn test_columns_transpose_rows() {
        let board = Board::from_rows([
            [Some(Mark::X), None, None],
            [Some(Mark::O), None, None],
            [Some(Mark::X), None, Some(Mark::O)],
        ]);
        assert_eq!(
            board.columns()[0],
            [Some(Mark::X), Some(Mark::O), Some(Mark::X)]
        );
        assert_eq!(board.diagonals()[0], [Some(Mark::X), None, Some(Mark::O)]);
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board = Board::new().with_mark(Position::CENTER, Mark::X);
        assert_eq!(board.to_string(), "0|1|2\n-+-+-\n3|x|5\n-+-+-\n6|7|8");
    }
}
