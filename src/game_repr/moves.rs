use smallvec::SmallVec;
use std::fmt;

/// A move on the 3x3 grid: zero-indexed row and column, each in 0..=2.
///
/// Construction does not validate the range; `Board::apply_move` rejects
/// out-of-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    row: usize,
    col: usize,
}

/// Move list that never spills to the heap: a grid holds at most 9 moves.
pub type MoveList = SmallVec<[Move; 9]>;

impl Move {
    pub fn new(row: usize, col: usize) -> Move {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
