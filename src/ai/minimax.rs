use crate::game::{Board, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Sentinel for a position where the root piece has connected four.
const WIN_SCORE: i32 = i32::MAX;
/// Sentinel for a position where the root piece's opponent has connected four.
const LOSS_SCORE: i32 = i32::MIN;

/// Depth-limited minimax agent with alpha-beta pruning.
///
/// The search walks a fixed-depth game tree, handing each branch its own
/// board copy, and scores non-terminal leaves with the injected heuristic.
/// Every leaf is evaluated from the perspective of the piece the top-level
/// call was made for, and the win/loss sentinels follow that same
/// convention for the whole tree.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    /// Create an agent searching `depth` plies with the default evaluator.
    ///
    /// Panics if `depth` is zero: a zero-ply search cannot pick a move.
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(WindowHeuristic))
    }

    /// Create an agent with a caller-supplied evaluator.
    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        assert!(depth >= 1, "search depth must be at least 1");
        MinimaxAgent { depth, heuristic }
    }

    fn best_move(&self, board: &Board, piece: Player) -> usize {
        let legal = board.legal_moves();
        assert!(!legal.is_empty(), "no legal moves available");

        let (column, _score) =
            self.minimax(board, self.depth, LOSS_SCORE, WIN_SCORE, true, piece, piece);

        // An already-decided board yields no column from the search; any
        // legal column satisfies the contract then.
        column.unwrap_or(legal[0])
    }

    /// Recursive alpha-beta minimax.
    ///
    /// Returns the best column at this node (`None` at leaves and terminal
    /// positions) and its score. `to_move` is the piece placed at this ply;
    /// `root` is the piece the whole search is maximizing for, fixed across
    /// the tree.
    fn minimax(
        &self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        to_move: Player,
        root: Player,
    ) -> (Option<usize>, i32) {
        // Terminal detection runs at every node, not just at depth 0
        if board.has_four_in_row(root.to_cell()) {
            return (None, WIN_SCORE);
        }
        if board.has_four_in_row(root.opponent().to_cell()) {
            return (None, LOSS_SCORE);
        }
        if !board.has_legal_move() {
            return (None, 0);
        }
        if depth == 0 {
            return (None, self.heuristic.evaluate(board, root));
        }

        let mut best_column = None;
        let mut best_score = if maximizing { LOSS_SCORE } else { WIN_SCORE };

        // Ascending column order keeps the search reproducible; ties go to
        // the first (lowest) column
        for col in board.legal_moves() {
            let child = board
                .with_move(col, to_move.to_cell())
                .expect("legal_moves returned a playable column");

            let (_, score) = self.minimax(
                &child,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                to_move.opponent(),
                root,
            );

            if maximizing {
                if best_column.is_none() || score > best_score {
                    best_score = score;
                    best_column = Some(col);
                }
                alpha = alpha.max(best_score);
            } else {
                if best_column.is_none() || score < best_score {
                    best_score = score;
                    best_column = Some(col);
                }
                beta = beta.min(best_score);
            }

            if alpha >= beta {
                break;
            }
        }

        (best_column, best_score)
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, piece: Player) -> usize {
        self.best_move(board, piece)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
