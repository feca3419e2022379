//! Core game logic: board representation, player types, and the match
//! state machine with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState, PlayError};
