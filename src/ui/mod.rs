//! Terminal UI: a ratatui front-end for human and bot players.

mod app;
mod game_view;

pub use app::{App, BoardMode, PlayerKind, TuiConfig};
