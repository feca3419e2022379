use crate::game::{Board, Player};

/// Universal interface for move-selection strategies.
///
/// An agent is handed a read-only board snapshot and the piece it plays for,
/// and answers with a column. It never mutates the authoritative match state.
/// Callers must not ask for a move on a board with no legal column.
pub trait Agent {
    /// Select a column to play for `piece` on the given board.
    fn select_move(&mut self, board: &Board, piece: Player) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
