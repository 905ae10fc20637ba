//! Core Connect-M game logic: piece colors, the board engine with local win
//! detection, grid snapshots, and stand-in boards for front-end and bot tests.

mod board;
mod color;
mod connect_m;
pub mod doubles;
mod grid;

pub use board::{Board, BoardConfig};
pub(crate) use board::check_dimensions;
pub use color::PieceColor;
pub use connect_m::ConnectM;
pub use grid::Grid;
