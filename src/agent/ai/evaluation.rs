// Position evaluation
// Returns scores from the perspective of the engine's own mark

use crate::game_repr::{Board, Mark, Outcome, LINES};

/// Score for a position the engine has won
pub const WIN_SCORE: i32 = 10;

/// Score for a position the opponent has won
pub const LOSS_SCORE: i32 = -10;

/// Score for a drawn position
pub const DRAW_SCORE: i32 = 0;

// Heuristic weights for non-terminal positions
const TWO_IN_LINE: i32 = 5;
const ONE_IN_LINE: i32 = 1;
const OPPONENT_TWO_IN_LINE: i32 = -4;
const CENTER_BONUS: i32 = 2;

/// Minimum score (below any terminal or heuristic value)
pub const MIN_SCORE: i32 = -WIN_SCORE - 100;

/// Maximum score (initial beta bound at the root)
pub const MAX_SCORE: i32 = WIN_SCORE + 100;

/// Score a terminal position for `mark`.
///
/// Win +10, loss -10, draw 0. A non-terminal board also scores 0, but the
/// search only calls this once the outcome is set.
pub fn evaluate_terminal(board: &Board, mark: Mark) -> i32 {
    match board.outcome() {
        Some(Outcome::Winner(winner)) if winner == mark => WIN_SCORE,
        Some(Outcome::Winner(_)) => LOSS_SCORE,
        _ => DRAW_SCORE,
    }
}

/// Static score for a non-terminal position, from `mark`'s perspective.
///
/// Each of the 8 lines is counted once: +5 for two own marks with the third
/// cell open (one move from winning), +1 for a single own mark with two open
/// cells, -4 for two opponent marks with the third cell open (a threat that
/// must be blocked). The own bonuses and the opponent penalty are scored by
/// independent checks per line, not folded into one branch chain. Holding
/// the center is worth a flat +2 on top.
pub fn evaluate_heuristic(board: &Board, mark: Mark) -> i32 {
    let own = mark.to_cell();
    let opponent = mark.opposite().to_cell();
    let mut score = 0;

    for line in &LINES {
        let mut own_count = 0;
        let mut opponent_count = 0;
        let mut empty_count = 0;
        for &(row, col) in line {
            let cell = board.cell(row, col);
            if cell == own {
                own_count += 1;
            } else if cell == opponent {
                opponent_count += 1;
            } else {
                empty_count += 1;
            }
        }

        if own_count == 2 && empty_count == 1 {
            score += TWO_IN_LINE;
        } else if own_count == 1 && empty_count == 2 {
            score += ONE_IN_LINE;
        }

        if opponent_count == 2 && empty_count == 1 {
            score += OPPONENT_TWO_IN_LINE;
        }
    }

    if board.cell(1, 1) == own {
        score += CENTER_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Move;

    fn played(moves: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(row, col) in moves {
            board.apply_move(Move::new(row, col)).unwrap();
        }
        board
    }

    #[test]
    fn test_terminal_win_and_loss() {
        // X takes the top row
        let board = played(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(evaluate_terminal(&board, Mark::X), WIN_SCORE);
        assert_eq!(evaluate_terminal(&board, Mark::O), LOSS_SCORE);
    }

    #[test]
    fn test_terminal_draw_is_zero() {
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
        assert_eq!(evaluate_terminal(&board, Mark::X), DRAW_SCORE);
        assert_eq!(evaluate_terminal(&board, Mark::O), DRAW_SCORE);
    }

    #[test]
    fn test_heuristic_empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(evaluate_heuristic(&board, Mark::X), 0);
        assert_eq!(evaluate_heuristic(&board, Mark::O), 0);
    }

    #[test]
    fn test_heuristic_center_bonus() {
        let board = played(&[(1, 1)]);
        // X holds the center: +2, plus +1 for each of the 4 lines through it
        assert_eq!(evaluate_heuristic(&board, Mark::X), CENTER_BONUS + 4);
    }

    #[test]
    fn test_heuristic_open_two_in_line() {
        // X at (0,0) and (0,1), O at (2,2); X's turn
        let board = played(&[(0, 0), (2, 2), (0, 1)]);
        let score = evaluate_heuristic(&board, Mark::X);
        // Top row: 2 own + 1 empty = +5. Col 0 and col 1 each: 1 own + 2
        // empty = +1. Diagonal (0,0)-(1,1)-(2,2) and row 2 and col 2 are
        // spoiled by O; anti-diagonal has 0 own marks. Rows 1 has no marks.
        assert_eq!(score, 5 + 1 + 1);
    }

    #[test]
    fn test_heuristic_opponent_threat_penalty() {
        // O threatens the top row; scored from X's perspective
        let board = played(&[(2, 0), (0, 0), (2, 1), (0, 1)]);
        // X: bottom row threat +5, lone mark on the open anti-diagonal +1;
        // cols 0 and 1 are spoiled for both sides.
        // O: (0,0), (0,1) top row threat -4.
        let score = evaluate_heuristic(&board, Mark::X);
        assert_eq!(score, 5 + 1 - 4);
    }

    #[test]
    fn test_heuristic_mirrored_position_scores_equal() {
        let board = played(&[(2, 0), (0, 0), (2, 1), (0, 1)]);
        // Each side has one open two and faces one threat
        assert_eq!(
            evaluate_heuristic(&board, Mark::X),
            evaluate_heuristic(&board, Mark::O)
        );
    }
}
