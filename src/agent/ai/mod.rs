// AI Agent - Minimax with optional Alpha-Beta pruning
//
// This module implements the classical adversarial search engine for the
// game. Key features:
// - Deterministic (same position always gives same move)
// - Full-width minimax guarantees game-theoretically optimal play
// - Alpha-beta pruning visits a subset of nodes without changing any value
// - An optional heuristic cutoff trades exactness for speed far from the
//   endgame

mod evaluation;
mod minimax;
mod minimax_player;
mod random;

pub use minimax_player::{MinimaxPlayer, SearchError, SearchResult};
pub use random::RandomPlayer;

// Re-export useful types
pub use evaluation::{
    evaluate_heuristic, evaluate_terminal, DRAW_SCORE, LOSS_SCORE, MAX_SCORE, MIN_SCORE, WIN_SCORE,
};
pub use minimax::{minimax, minimax_alpha_beta};
