// Minimax search over the game tree
//
// Two variants share the same recursive structure. The plain version always
// expands to terminal states and guarantees game-theoretically optimal
// scores. The alpha-beta version carries a [alpha, beta] window downward and
// stops expanding siblings that cannot change the result; its scores are
// numerically identical to the plain version, it just visits fewer nodes.
// With heuristics enabled, the alpha-beta version may also stop early at
// minimizing nodes far from the endgame and return a static score instead.
//
// Every explored node clones the board before applying its move, so sibling
// branches never observe each other's state.

use super::evaluation::{evaluate_heuristic, evaluate_terminal, MAX_SCORE, MIN_SCORE};
use crate::game_repr::{Board, Mark};

/// Empty-cell count above which the heuristic cutoff may replace recursion.
pub const HEURISTIC_CUTOFF_EMPTIES: usize = 6;

/// Plain minimax without pruning.
///
/// Scores `board` for `mark`. `maximizing` tells whose simulated turn it is:
/// `mark`'s own (take the maximum over children) or the opponent's (take the
/// minimum). `nodes` counts visited nodes for search statistics.
pub fn minimax(board: &Board, mark: Mark, maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if board.is_terminal() {
        return evaluate_terminal(board, mark);
    }

    if maximizing {
        let mut best = MIN_SCORE;
        for mv in board.available_moves() {
            let mut child = board.clone();
            child.apply_move(mv).expect("enumerated move is legal");
            best = best.max(minimax(&child, mark, false, nodes));
        }
        best
    } else {
        let mut best = MAX_SCORE;
        for mv in board.available_moves() {
            let mut child = board.clone();
            child.apply_move(mv).expect("enumerated move is legal");
            best = best.min(minimax(&child, mark, true, nodes));
        }
        best
    }
}

/// Minimax with alpha-beta pruning and an optional heuristic cutoff.
///
/// `alpha` is the best score the maximizer can already guarantee on this
/// path, `beta` the best the minimizer can. Once the window closes
/// (`alpha >= beta`) the remaining siblings cannot affect the ancestor's
/// choice and are skipped.
///
/// The heuristic cutoff applies only at minimizing nodes with more than
/// [`HEURISTIC_CUTOFF_EMPTIES`] empty cells, so the endgame is always
/// searched exactly to terminal states.
pub fn minimax_alpha_beta(
    board: &Board,
    mark: Mark,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    use_heuristics: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if board.is_terminal() {
        return evaluate_terminal(board, mark);
    }

    if use_heuristics && !maximizing && board.count_empty() > HEURISTIC_CUTOFF_EMPTIES {
        return evaluate_heuristic(board, mark);
    }

    if maximizing {
        let mut value = MIN_SCORE;
        for mv in board.available_moves() {
            let mut child = board.clone();
            child.apply_move(mv).expect("enumerated move is legal");
            value = value.max(minimax_alpha_beta(
                &child,
                mark,
                false,
                alpha,
                beta,
                use_heuristics,
                nodes,
            ));
            alpha = alpha.max(value);
            if alpha >= beta {
                break; // Beta cutoff
            }
        }
        value
    } else {
        let mut value = MAX_SCORE;
        for mv in board.available_moves() {
            let mut child = board.clone();
            child.apply_move(mv).expect("enumerated move is legal");
            value = value.min(minimax_alpha_beta(
                &child,
                mark,
                true,
                alpha,
                beta,
                use_heuristics,
                nodes,
            ));
            beta = beta.min(value);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        value
    }
}
