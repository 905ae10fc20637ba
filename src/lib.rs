//! # Connect-M
//!
//! A generalized Connect Four: an N-row by M-column board where players drop
//! pieces into columns and win with `m` in a row horizontally, vertically, or
//! diagonally. Ships with random and greedy bots, a ratatui terminal UI, and
//! a headless bot-vs-bot simulation harness.
//!
//! ## Modules
//!
//! - [`game`] — Board engine, piece colors, grid snapshots, stand-in boards
//! - [`ai`] — Policy trait and the random / greedy bots
//! - [`simulation`] — Batch bot-vs-bot games and result tallies
//! - [`ui`] — Terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod simulation;
pub mod ui;
