//! # Minimax Connect Four
//!
//! A Connect Four game on a square board of configurable size, driven by a
//! depth-limited minimax agent with alpha-beta pruning and a static window
//! heuristic. Play interactively in a Ratatui terminal UI or run headless
//! agent-vs-agent matches.
//!
//! ## Modules
//!
//! - [`game`]: core game logic: board, player, match state machine
//! - [`ai`]: the `Agent` contract, alpha-beta minimax, window heuristic,
//!   random baseline
//! - [`ui`]: terminal UI for the interactive match
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
