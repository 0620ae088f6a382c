// Random move player for baselines and tests

use crate::agent::player::Player;
use crate::game_repr::{Board, Move};
use rand::seq::SliceRandom;

/// Picks a uniformly random legal move. Useful as a weak opponent in the
/// console menu and as the baseline the engine is measured against.
#[derive(Debug, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, board: &Board) -> Option<Move> {
        let moves = board.available_moves();
        moves.as_slice().choose(&mut rand::thread_rng()).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
