use super::board::MoveError;
use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("the game is already over")]
    GameOver,
}

/// Authoritative match state: the board, whose turn it is, and the outcome
/// once the game is decided. Agents never touch this; they only receive
/// board snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create the initial state for a `size` x `size` match. Red starts.
    pub fn new(size: usize) -> Self {
        GameState {
            board: Board::new(size),
            current_player: Player::Red,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, PlayError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place (for the UI loop)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), PlayError> {
        if self.is_terminal() {
            return Err(PlayError::GameOver);
        }

        let mover = self.current_player;
        self.board.drop_piece(column, mover.to_cell())?;

        if self.board.has_four_in_row(mover.to_cell()) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = mover.opponent();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(7);
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move_alternates_turns() {
        let state = GameState::new(7);
        let next = state.apply_move(3).unwrap();

        assert_eq!(next.current_player(), Player::Yellow);
        assert_eq!(next.board().get(0, 3), Cell::Red);
        // The original state is an untouched snapshot
        assert_eq!(state.board().get(0, 3), Cell::Empty);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::new(7);

        // Red builds the bottom row while Yellow stacks above
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut state = GameState::new(7);
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow
            }
        }

        assert_eq!(state.apply_move(6), Err(PlayError::GameOver));
    }

    #[test]
    fn test_full_column_error_carries_column() {
        let mut state = GameState::new(7);
        for _ in 0..7 {
            state.apply_move_mut(2).unwrap();
        }
        let err = state.apply_move(2).unwrap_err();
        assert_eq!(err.to_string(), "column 2 is full");
    }

    #[test]
    fn test_draw_on_small_board() {
        // 4x4 fill with no four-in-a-row: columns paired so every line mixes
        let mut state = GameState::new(4);
        for &col in &[0, 1, 0, 1, 2, 3, 2, 3, 1, 0, 1, 0, 3, 2, 3, 2] {
            state.apply_move_mut(col).unwrap();
        }
        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }
}
