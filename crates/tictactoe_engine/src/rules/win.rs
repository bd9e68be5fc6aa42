//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use tracing::instrument;

/// All eight lines: rows, then columns, then both diagonals.
pub fn lines(board: &Board) -> [[Option<Mark>; 3]; 8] {
    let [r0, r1, r2] = *board.rows();
    let [c0, c1, c2] = board.columns();
    let [d0, d1] = board.diagonals();
    [r0, r1, r2, c0, c1, c2, d0, d1]
}

/// Checks whether `mark` holds any complete row, column or diagonal.
#[instrument(skip(board))]
pub fn is_win(board: &Board, mark: Mark) -> bool {
    lines(board)
        .iter()
        .any(|line| line.iter().all(|cell| *cell == Some(mark)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{O, X};

    fn board(rows: [[Mark; 3]; 3]) -> Board {
        Board::from_rows(rows.map(|row| row.map(Some)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert!(!is_win(&Board::new(), X));
        assert!(!is_win(&Board::new(), O));
    }

    #[test]
    fn test_winner_column() {
        let b = board([[X, O, X], [X, X, O], [X, O, X]]);
        assert!(is_win(&b, X));
    }

    #[test]
    fn test_winner_row() {
        let b = board([[X, X, X], [X, O, O], [O, O, X]]);
        assert!(is_win(&b, X));
    }

    #[test]
    fn test_winner_diagonal() {
        let b = board([[X, O, X], [X, X, O], [O, O, X]]);
        assert!(is_win(&b, X));
    }

    #[test]
    fn test_no_false_positive() {
        let b = board([[O, X, O], [X, X, O], [X, O, X]]);
        assert!(!is_win(&b, X));
    }

    #[test]
    fn test_anti_diagonal() {
        let b = Board::from_rows([
            [None, None, Some(O)],
            [None, Some(O), None],
            [Some(O), None, None],
        ]);
        assert!(is_win(&b, O));
        assert!(!is_win(&b, X));
    }

    #[test]
    fn test_win_is_per_mark() {
        let b = board([[X, X, X], [X, O, O], [O, O, X]]);
        assert!(!is_win(&b, O));
    }
}
