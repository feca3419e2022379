use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that plays a uniformly random legal column.
///
/// Useful as a baseline opponent and for exercising the match loop; seed it
/// for reproducible games.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A deterministic agent for tests and replayable matches.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _piece: Player) -> usize {
        let moves = board.legal_moves();
        assert!(!moves.is_empty(), "no legal moves available");
        let idx = self.rng.random_range(0..moves.len());
        moves[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_legal_moves() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new(7);
        for _ in 0..7 {
            board.drop_piece(0, Player::Red.to_cell()).unwrap();
        }

        for _ in 0..100 {
            let col = agent.select_move(&board, Player::Yellow);
            assert!(board.is_legal(col), "column {col} is not legal");
        }
    }

    #[test]
    fn test_seeded_agent_is_deterministic() {
        let board = Board::new(7);
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);

        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board, Player::Red),
                b.select_move(&board, Player::Red)
            );
        }
    }

    #[test]
    fn test_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
