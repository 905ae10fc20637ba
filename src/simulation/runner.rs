use std::thread;

use tracing::{debug, info, instrument};

use crate::ai::{Policy, PolicyKind};
use crate::error::SimulationError;
use crate::game::{BoardConfig, ConnectM, PieceColor};

use super::stats::{GameRecord, SimulationStats};

/// Headless bot-vs-bot simulation settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub num_games: usize,
    pub threads: usize,
    /// Color that moves first in every game.
    pub first: PieceColor,
    /// Base seed; when absent the bots are seeded from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Strategy for the Yellow bot.
    pub player1: PolicyKind,
    /// Strategy for the Red bot.
    pub player2: PolicyKind,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_games: 10_000,
            threads: 1,
            first: PieceColor::Yellow,
            seed: None,
            player1: PolicyKind::Random,
            player2: PolicyKind::Random,
        }
    }
}

/// Play one game on `board` from its current state, alternating turns
/// starting with `first`.
pub fn play_game(
    board: &mut dyn ConnectM,
    yellow: &mut dyn Policy,
    red: &mut dyn Policy,
    first: PieceColor,
) -> Result<GameRecord, SimulationError> {
    // No real board takes more moves than it has cells.
    let limit = board.num_rows() * board.num_cols();
    let mut current = first;
    let mut moves = 0;

    while !board.is_done() {
        if moves == limit {
            return Err(SimulationError::MoveLimit { limit });
        }
        let col = match current {
            PieceColor::Yellow => yellow.suggest_move(&*board),
            PieceColor::Red => red.suggest_move(&*board),
        }
        .ok_or(SimulationError::NoMove { color: current })?;
        board.drop_piece(col, current)?;
        moves += 1;
        current = current.other();
    }

    Ok(GameRecord {
        winner: board.winner(),
        moves,
    })
}

/// Play `num_games` games on one shared board, resetting it before each game.
#[instrument(skip(board, yellow, red))]
pub fn simulate(
    board: &mut dyn ConnectM,
    num_games: usize,
    yellow: &mut dyn Policy,
    red: &mut dyn Policy,
    first: PieceColor,
) -> Result<SimulationStats, SimulationError> {
    let mut stats = SimulationStats::new();
    for _ in 0..num_games {
        board.reset();
        let record = play_game(board, yellow, red, first)?;
        stats.record(record);
    }
    debug!(games = stats.games, draws = stats.draws, "batch finished");
    Ok(stats)
}

/// Spread `config.num_games` over `config.threads` workers, each with its own
/// board and bots, and merge the results.
#[instrument(skip_all, fields(games = config.num_games, threads = config.threads))]
pub fn simulate_parallel(
    board_config: &BoardConfig,
    config: &SimulationConfig,
) -> Result<SimulationStats, SimulationError> {
    let threads = config.threads.max(1);
    info!(
        yellow = config.player1.name(),
        red = config.player2.name(),
        "starting simulation"
    );

    let totals = thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|worker| {
                let games = games_for_worker(config.num_games, threads, worker);
                scope.spawn(move || run_worker(board_config, config, worker, games))
            })
            .collect();

        let mut totals = SimulationStats::new();
        for handle in handles {
            let stats = handle
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
            totals.merge(&stats);
        }
        Ok::<_, SimulationError>(totals)
    })?;

    info!(
        yellow_wins = totals.yellow_wins,
        red_wins = totals.red_wins,
        draws = totals.draws,
        "simulation complete"
    );
    Ok(totals)
}

fn run_worker(
    board_config: &BoardConfig,
    config: &SimulationConfig,
    worker: usize,
    games: usize,
) -> Result<SimulationStats, SimulationError> {
    let mut board = board_config.build()?;
    let seeds = config.seed.map(|base| {
        (
            worker_seed(base, worker, PieceColor::Yellow),
            worker_seed(base, worker, PieceColor::Red),
        )
    });
    let mut yellow = config.player1.build(
        PieceColor::Yellow,
        PieceColor::Red,
        seeds.map(|(y, _)| y),
    );
    let mut red = config
        .player2
        .build(PieceColor::Red, PieceColor::Yellow, seeds.map(|(_, r)| r));

    debug!(worker, games, "worker started");
    simulate(&mut board, games, yellow.as_mut(), red.as_mut(), config.first)
}

/// Games assigned to `worker` so that the counts differ by at most one.
fn games_for_worker(total: usize, workers: usize, worker: usize) -> usize {
    total / workers + usize::from(worker < total % workers)
}

/// Seed for the policy sitting on `side` in `worker`'s games.
///
/// Every (worker, side) seat gets its own stream, so no two policies in a
/// run share an RNG sequence.
pub fn worker_seed(base_seed: u64, worker: usize, side: PieceColor) -> u64 {
    let side = match side {
        PieceColor::Yellow => 0,
        PieceColor::Red => 1,
    };
    let seat = ((worker as u64) << 1) | side;
    // splitmix64 step; the finalizer is a bijection so distinct seats never collide
    let mut z = base_seed.wrapping_add(seat.wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
