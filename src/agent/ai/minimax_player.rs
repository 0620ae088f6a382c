//! MinimaxPlayer - the adversarial search engine behind the AI side.
//!
//! The player holds only configuration: the mark it searches for and two
//! independent strategy toggles (alpha-beta pruning, heuristic cutoff). It
//! keeps no state between calls - every `choose_move` is a fresh,
//! reproducible computation with no memoization or history.
//!
//! Move selection delegates to the search functions in the sibling module;
//! this file owns the root loop: score every available move, keep the one
//! with the strictly greatest value, and report search statistics.

use super::evaluation::{MAX_SCORE, MIN_SCORE};
use super::minimax::{minimax, minimax_alpha_beta};
use crate::agent::player::Player;
use crate::game_repr::{Board, Mark, Move};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("cannot search a finished game")]
    GameOver,

    #[error("no available moves to search")]
    NoMoves,
}

/// Result of a search operation
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

/// AI player that selects moves by minimax search.
///
/// Three strategies, chosen by the two toggles:
/// - plain minimax (`use_alpha_beta = false`; the heuristic toggle is
///   ignored on this path, which always expands the full subtree)
/// - alpha-beta pruned minimax (`use_alpha_beta = true`), value-identical
///   to plain minimax
/// - alpha-beta plus a heuristic cutoff (`use_heuristics = true`), which
///   trades exactness for speed in the early game
pub struct MinimaxPlayer {
    /// The mark this engine plays and maximizes for
    mark: Mark,
    /// Prune subtrees that cannot change the result
    use_alpha_beta: bool,
    /// Replace deep early-game recursion with a static score
    use_heuristics: bool,
    /// Display name for this AI player
    name: String,
}

impl MinimaxPlayer {
    pub fn new(mark: Mark, use_alpha_beta: bool, use_heuristics: bool) -> Self {
        let strategy = match (use_alpha_beta, use_heuristics) {
            (false, _) => "minimax",
            (true, false) => "alpha-beta",
            (true, true) => "alpha-beta + heuristics",
        };
        Self {
            mark,
            use_alpha_beta,
            use_heuristics,
            name: format!("AI ({})", strategy),
        }
    }

    /// Exact engine: pruning on, heuristic cutoff off. Never loses.
    pub fn perfect(mark: Mark) -> Self {
        Self::new(mark, true, false)
    }

    /// Fast engine: pruning and the early-game heuristic cutoff.
    pub fn fast(mark: Mark) -> Self {
        Self::new(mark, true, true)
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Best move for the engine's mark in `board`.
    pub fn choose_move(&self, board: &Board) -> Result<Move, SearchError> {
        self.search(board).map(|result| result.best_move)
    }

    /// Run the configured search and return the move with statistics.
    ///
    /// Fails fast when called on a finished game or a full grid; the caller
    /// is expected to only ask for a move while the game is ongoing.
    pub fn search(&self, board: &Board) -> Result<SearchResult, SearchError> {
        if board.is_terminal() {
            return Err(SearchError::GameOver);
        }
        let moves = board.available_moves();
        let Some(&first) = moves.first() else {
            return Err(SearchError::NoMoves);
        };

        let start = Instant::now();

        // Known-optimal opening: taking the center skips the widest search
        // of the game for an instant reply.
        if board.is_empty() {
            return Ok(SearchResult {
                best_move: Move::new(1, 1),
                score: 0,
                nodes_searched: 0,
                time_ms: start.elapsed().as_millis() as u64,
            });
        }

        let mut nodes = 0u64;
        let mut best_move = first;
        let mut best_value = MIN_SCORE;
        let mut alpha = MIN_SCORE;
        // Beta never tightens at the root: there is no minimizing ancestor
        // to prune for.
        let beta = MAX_SCORE;

        for &mv in &moves {
            let mut child = board.clone();
            child.apply_move(mv).expect("enumerated move is legal");

            let value = if self.use_alpha_beta {
                minimax_alpha_beta(
                    &child,
                    self.mark,
                    false,
                    alpha,
                    beta,
                    self.use_heuristics,
                    &mut nodes,
                )
            } else {
                minimax(&child, self.mark, false, &mut nodes)
            };

            // Strictly greater: ties go to the first candidate in row-major
            // enumeration order.
            if value > best_value {
                best_value = value;
                best_move = mv;
            }

            alpha = alpha.max(best_value);
        }

        Ok(SearchResult {
            best_move,
            score: best_value,
            nodes_searched: nodes,
            time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl Player for MinimaxPlayer {
    fn get_move(&mut self, board: &Board) -> Option<Move> {
        match self.search(board) {
            Ok(result) => {
                log::debug!(
                    "[{}] {} scored {} after {} nodes in {} ms",
                    self.name,
                    result.best_move,
                    result.score,
                    result.nodes_searched,
                    result.time_ms
                );
                Some(result.best_move)
            }
            Err(err) => {
                log::warn!("[{}] asked for a move with nothing to search: {}", self.name, err);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
