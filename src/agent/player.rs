//! Player trait and associated types for game agents.
//!
//! This module provides the core abstraction for entities that can provide
//! moves. Different player types (human, search AI, random baseline)
//! implement the `Player` trait to participate in games run by the console
//! loop or by test harnesses.
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction.
//! Different implementations require different initialization parameters
//! (the AI needs its mark and strategy toggles, the human needs nothing),
//! so the trait does not define a constructor method.
//!
//! # Synchronous Design
//!
//! `get_move()` is intentionally synchronous (blocking). This keeps the
//! control flow of a turn-based game trivial: `HumanPlayer` blocks on
//! stdin, the AI blocks during search, and the game loop simply calls
//! `get_move()` and waits.

use crate::game_repr::{Board, Mark, Move, Outcome};

/// Result of a completed game, passed to players via `game_ended()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// X completed three in a row
    XWins,
    /// O completed three in a row
    OWins,
    /// Full grid with no three in a row
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning mark
    pub fn from_winner(winner: Mark) -> Self {
        match winner {
            Mark::X => GameResult::XWins,
            Mark::O => GameResult::OWins,
        }
    }

    /// Create a GameResult from a board outcome
    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(mark) => Self::from_winner(mark),
            Outcome::Draw => GameResult::Draw,
        }
    }
}

/// Trait for entities that can provide moves.
///
/// A player is anything that can be asked for a move in a given position:
/// a human at the terminal, a search engine, or a random baseline.
///
/// Only `get_move()` must be implemented; the notification hooks default to
/// no-ops.
///
/// # Method Behavior
///
/// ## `get_move()`
/// - **Blocking**: may block until a move is available
/// - **Returns `None`**: if the player resigns or cannot move
/// - The returned move is validated by the caller when it is applied
pub trait Player {
    /// Request the next move from this player.
    ///
    /// Called only when it is this player's turn and the game is not over.
    /// `board` is the live position; implementations must not mutate it
    /// (they receive it by shared reference and clone if they need to
    /// explore).
    fn get_move(&mut self, board: &Board) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    ///
    /// Override to display or log opponent moves; the default does nothing.
    fn opponent_moved(&mut self, _mv: Move) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    ///
    /// Override to display the result or record statistics; the default
    /// does nothing.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Display name for this player, used by the console loop and logging.
    fn name(&self) -> &str {
        "Player"
    }
}
