//! Batch bot-vs-bot simulation: play many games and tally the outcomes.

mod runner;
mod stats;

pub use runner::{play_game, simulate, simulate_parallel, worker_seed, SimulationConfig};
pub use stats::{GameRecord, SimulationStats};
