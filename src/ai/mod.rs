//! Move-selection strategies: the `Agent` contract, the alpha-beta minimax
//! engine with its pluggable heuristic, and a random baseline.

mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
