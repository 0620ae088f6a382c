//! Human player reading moves from standard input.

use crate::agent::player::Player;
use crate::game_repr::{Board, Move, SIZE};
use std::io::{self, BufRead, Write};

/// Interactive player that prompts for `row col` pairs on the terminal.
///
/// Malformed input, out-of-range coordinates, and occupied cells are all
/// re-prompted here, so the move handed back to the game loop is always
/// applicable. Closing stdin (EOF) is treated as resignation.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Parse a "row col" line into a move, without validating occupancy.
    fn parse_line(line: &str) -> Option<Move> {
        let mut parts = line.split_whitespace();
        let row: usize = parts.next()?.parse().ok()?;
        let col: usize = parts.next()?.parse().ok()?;
        if parts.next().is_some() || row >= SIZE || col >= SIZE {
            return None;
        }
        Some(Move::new(row, col))
    }
}

impl Player for HumanPlayer {
    fn get_move(&mut self, board: &Board) -> Option<Move> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("Your move (row col): ");
            let _ = io::stdout().flush();

            let line = match lines.next() {
                Some(Ok(line)) => line,
                // EOF or broken pipe: resign
                _ => return None,
            };

            let Some(mv) = Self::parse_line(&line) else {
                println!("Invalid input. Please enter two numbers between 0-2 separated by space.");
                continue;
            };

            if !board.cell(mv.row(), mv.col()).is_empty() {
                println!("Invalid move. Try again.");
                continue;
            }

            return Some(mv);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
