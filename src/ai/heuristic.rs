use crate::game::{Board, Cell, Player, WIN_LENGTH};

/// Trait for scoring a board position from a player's perspective.
pub trait Heuristic {
    fn evaluate(&self, board: &Board, piece: Player) -> i32;
}

/// Static positional evaluator: a fixed linear combination of pattern counts
/// over every 4-cell window, plus a center-column bonus.
///
/// Higher is better for `piece`. The function is pure; scoring the same
/// board twice yields the same value.
pub struct WindowHeuristic;

impl WindowHeuristic {
    /// Score one window from `n` own pieces, `o` opponent pieces and
    /// `e` empty cells.
    ///
    /// The 100/5/2 ladder is mutually exclusive (first match wins); the
    /// opponent-threat penalty is an independent additive term.
    fn score_window(n: usize, o: usize, e: usize) -> i32 {
        let mut score = 0;

        if n == 4 {
            score += 100;
        } else if n == 3 && e == 1 {
            score += 5;
        } else if n == 2 && e == 2 {
            score += 2;
        }

        if o == 3 && e == 1 {
            score -= 4;
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, piece: Player) -> i32 {
        let own = piece.to_cell();
        let opp = piece.opponent().to_cell();
        let n = board.size();
        let mut score = 0;

        // Center column bonus: central cells sit in the most windows
        let center = board.center_column();
        for row in 0..n {
            if board.get(row, center) == own {
                score += 3;
            }
        }

        let window = |cells: [(usize, usize); WIN_LENGTH]| -> i32 {
            let mut mine = 0;
            let mut theirs = 0;
            let mut empty = 0;
            for (row, col) in cells {
                match board.get(row, col) {
                    c if c == own => mine += 1,
                    c if c == opp => theirs += 1,
                    _ => empty += 1,
                }
            }
            Self::score_window(mine, theirs, empty)
        };

        // Horizontal
        for r in 0..n {
            for c in 0..n - 3 {
                score += window([(r, c), (r, c + 1), (r, c + 2), (r, c + 3)]);
            }
        }

        // Vertical
        for c in 0..n {
            for r in 0..n - 3 {
                score += window([(r, c), (r + 1, c), (r + 2, c), (r + 3, c)]);
            }
        }

        // Rising diagonal
        for r in 0..n - 3 {
            for c in 0..n - 3 {
                score += window([(r, c), (r + 1, c + 1), (r + 2, c + 2), (r + 3, c + 3)]);
            }
        }

        // Falling diagonal
        for r in 0..n - 3 {
            for c in 0..n - 3 {
                score += window([(r + 3, c), (r + 2, c + 1), (r + 1, c + 2), (r, c + 3)]);
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(board: &Board, piece: Player) -> i32 {
        WindowHeuristic.evaluate(board, piece)
    }

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new(7);
        assert_eq!(evaluate(&board, Player::Red), 0);
        assert_eq!(evaluate(&board, Player::Yellow), 0);
    }

    #[test]
    fn window_ladder_is_monotonic() {
        // Filling an otherwise-empty window one piece at a time climbs the
        // ladder, and a completed window is pinned at 100
        assert_eq!(WindowHeuristic::score_window(0, 0, 4), 0);
        assert_eq!(WindowHeuristic::score_window(1, 0, 3), 0);
        assert_eq!(WindowHeuristic::score_window(2, 0, 2), 2);
        assert_eq!(WindowHeuristic::score_window(3, 0, 1), 5);
        assert_eq!(WindowHeuristic::score_window(4, 0, 0), 100);
    }

    #[test]
    fn opponent_threat_is_an_independent_penalty() {
        // Three opponent pieces and one gap cost exactly 4, no matter what
        // the own-piece ladder contributed
        assert_eq!(WindowHeuristic::score_window(0, 3, 1), -4);
        assert_eq!(
            WindowHeuristic::score_window(0, 3, 1) - WindowHeuristic::score_window(0, 0, 4),
            -4
        );
    }

    #[test]
    fn blocked_window_scores_nothing() {
        // Mixed windows trigger neither the ladder nor the penalty
        assert_eq!(WindowHeuristic::score_window(2, 2, 0), 0);
        assert_eq!(WindowHeuristic::score_window(3, 1, 0), 0);
        assert_eq!(WindowHeuristic::score_window(1, 3, 0), 0);
    }

    #[test]
    fn center_pieces_score_three_each() {
        let mut board = Board::new(7);
        board.drop_piece(3, Cell::Red).unwrap();

        // One red piece in the center column: +3 center bonus, no window
        // reaches the 2-in-a-row tier yet
        assert_eq!(evaluate(&board, Player::Red), 3);

        board.drop_piece(3, Cell::Red).unwrap();
        // Two stacked center pieces: +6 center, +2 for the vertical window
        // the pair now fills
        assert_eq!(evaluate(&board, Player::Red), 8);
    }

    #[test]
    fn center_preferred_over_edge() {
        let mut center = Board::new(7);
        center.drop_piece(3, Cell::Red).unwrap();
        let mut edge = Board::new(7);
        edge.drop_piece(0, Cell::Red).unwrap();

        assert!(evaluate(&center, Player::Red) > evaluate(&edge, Player::Red));
    }

    #[test]
    fn score_is_piece_relative() {
        let mut board = Board::new(7);
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        let red = evaluate(&board, Player::Red);
        let yellow = evaluate(&board, Player::Yellow);
        assert!(red > 0, "three in a row should score positive, got {red}");
        assert!(yellow < 0, "the threatened side should score negative, got {yellow}");
    }

    #[test]
    fn evaluation_is_idempotent() {
        let mut board = Board::new(7);
        for &(col, cell) in &[(3, Cell::Red), (3, Cell::Yellow), (2, Cell::Red), (4, Cell::Yellow)] {
            board.drop_piece(col, cell).unwrap();
        }

        let first = evaluate(&board, Player::Red);
        let second = evaluate(&board, Player::Red);
        assert_eq!(first, second);
    }

    #[test]
    fn odd_and_even_sizes_use_the_floor_center() {
        // 6x6 board: center column is 3
        let mut board = Board::new(6);
        board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(evaluate(&board, Player::Red), 3);

        // 5x5 board: center column is 2
        let mut board = Board::new(5);
        board.drop_piece(2, Cell::Red).unwrap();
        assert_eq!(evaluate(&board, Player::Red), 3);
    }
}
