use super::{Cell, Mark, Move, MoveList};
use std::fmt;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

pub const SIZE: usize = 3;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Mark),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is outside the 3x3 grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Full game state: grid contents, side to move, and outcome once decided.
///
/// `Clone` yields a fully independent copy; the search clones once per
/// explored node so sibling branches never see each other's moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
    to_move: Mark,
    outcome: Option<Outcome>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty grid, X to move.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
            to_move: Mark::X,
            outcome: None,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// The mark that takes the next move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// True when no cell has been played yet.
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }

    pub fn count_empty(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// All empty cells in row-major order (row 0 left to right, then row 1,
    /// then row 2). Enumeration order is part of the contract: the search
    /// breaks score ties by first-encountered move.
    pub fn available_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        if self.is_terminal() {
            return moves;
        }
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col].is_empty() {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Play the current mover's mark at `mv`.
    ///
    /// Errors leave the board untouched. On success the outcome is
    /// recomputed, and the side to move flips only while the game is still
    /// ongoing (the winner stays "to move" in a terminal position, matching
    /// the mover-made-the-last-move reading used by terminal scoring).
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let (row, col) = (mv.row(), mv.col());
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.cells[row][col].is_empty() {
            return Err(MoveError::OccupiedCell { row, col });
        }

        self.cells[row][col] = self.to_move.to_cell();
        self.outcome = self.compute_outcome();

        if !self.is_terminal() {
            self.to_move = self.to_move.opposite();
        }

        Ok(())
    }

    /// Scan the 8 lines for a win, then check for a full-grid draw.
    ///
    /// At most one winning line can be new (only one cell changed since the
    /// last scan), so the first hit is the only hit.
    fn compute_outcome(&self) -> Option<Outcome> {
        for line in &LINES {
            let [a, b, c] = line.map(|(row, col)| self.cells[row][col]);
            if !a.is_empty() && a == b && b == c {
                return a.mark().map(Outcome::Winner);
            }
        }

        if self.count_empty() == 0 {
            return Some(Outcome::Draw);
        }

        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", row)?;
            for cell in cells {
                let symbol = match cell.mark() {
                    Some(mark) => mark.name(),
                    None => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(moves: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(row, col) in moves {
            board.apply_move(Move::new(row, col)).unwrap();
        }
        board
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.to_move(), Mark::X);
        assert_eq!(board.outcome(), None);
        assert_eq!(board.available_moves().len(), 9);
    }

    #[test]
    fn test_moves_enumerate_row_major() {
        let board = Board::new();
        let moves: Vec<(usize, usize)> = board
            .available_moves()
            .iter()
            .map(|mv| (mv.row(), mv.col()))
            .collect();
        assert_eq!(moves[0], (0, 0));
        assert_eq!(moves[1], (0, 1));
        assert_eq!(moves[3], (1, 0));
        assert_eq!(moves[8], (2, 2));
    }

    #[test]
    fn test_apply_move_alternates_mover() {
        let board = played(&[(0, 0)]);
        assert_eq!(board.cell(0, 0), Cell::X);
        assert_eq!(board.to_move(), Mark::O);

        let board = played(&[(0, 0), (1, 1)]);
        assert_eq!(board.cell(1, 1), Cell::O);
        assert_eq!(board.to_move(), Mark::X);
    }

    #[test]
    fn test_occupied_cell_rejected_and_state_unchanged() {
        let mut board = played(&[(0, 0)]);
        let before = board.clone();

        let err = board.apply_move(Move::new(0, 0)).unwrap_err();
        assert_eq!(err, MoveError::OccupiedCell { row: 0, col: 0 });
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut board = Board::new();
        let err = board.apply_move(Move::new(3, 0)).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds { row: 3, col: 0 });
        assert!(board.is_empty());
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        // X: (0,0) (0,1) (0,2) wins the top row
        let mut board = played(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(board.outcome(), Some(Outcome::Winner(Mark::X)));

        let err = board.apply_move(Move::new(2, 2)).unwrap_err();
        assert_eq!(err, MoveError::GameOver);
    }

    #[test]
    fn test_row_column_and_diagonal_wins() {
        let row_win = played(&[(1, 0), (0, 0), (1, 1), (0, 1), (1, 2)]);
        assert_eq!(row_win.outcome(), Some(Outcome::Winner(Mark::X)));

        let col_win = played(&[(2, 2), (0, 1), (1, 2), (1, 1), (0, 0), (2, 1)]);
        assert_eq!(col_win.outcome(), Some(Outcome::Winner(Mark::O)));

        let diag_win = played(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        assert_eq!(diag_win.outcome(), Some(Outcome::Winner(Mark::X)));
    }

    #[test]
    fn test_winner_stays_to_move() {
        let board = played(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(board.to_move(), Mark::X);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X X O / O O X / X O X: no three in a row
        let board = played(&[
            (0, 0),
            (0, 2),
            (0, 1),
            (1, 0),
            (1, 2),
            (1, 1),
            (2, 0),
            (2, 1),
            (2, 2),
        ]);
        assert_eq!(board.outcome(), Some(Outcome::Draw));
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = played(&[(0, 0), (1, 1)]);
        let mut copy = original.clone();
        copy.apply_move(Move::new(2, 2)).unwrap();

        assert_eq!(original.cell(2, 2), Cell::Empty);
        assert_eq!(original.to_move(), Mark::X);
        assert_eq!(original.outcome(), None);
    }
}
