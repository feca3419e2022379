//! Terminal UI: an interactive match view, human against a configured agent.

mod app;
mod game_view;

pub use app::App;
