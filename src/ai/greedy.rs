use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::trace;

use crate::game::{ConnectM, PieceColor};

use super::policy::Policy;

/// One-ply greedy policy.
///
/// Scanning columns left to right it takes the first immediate win; failing
/// that it blocks the first column where the opponent would win next; failing
/// that it picks uniformly among the remaining droppable columns.
pub struct GreedyPolicy {
    color: PieceColor,
    opponent: PieceColor,
    rng: StdRng,
}

impl GreedyPolicy {
    pub fn new(color: PieceColor, opponent: PieceColor) -> Self {
        GreedyPolicy {
            color,
            opponent,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(color: PieceColor, opponent: PieceColor, seed: u64) -> Self {
        GreedyPolicy {
            color,
            opponent,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for GreedyPolicy {
    fn suggest_move(&mut self, board: &dyn ConnectM) -> Option<usize> {
        let mut block: Option<usize> = None;
        let mut quiet = Vec::new();

        for col in (0..board.num_cols()).filter(|&col| board.can_drop(col)) {
            if board.would_win(col, self.color) {
                trace!(col, color = self.color.name(), "greedy win");
                return Some(col);
            }
            if board.would_win(col, self.opponent) {
                // Keep scanning: a later column may still win outright.
                block.get_or_insert(col);
            } else {
                quiet.push(col);
            }
        }

        if let Some(col) = block {
            trace!(
                col,
                color = self.color.name(),
                opponent = self.opponent.name(),
                "greedy block"
            );
            return Some(col);
        }
        if quiet.is_empty() {
            return None;
        }
        Some(quiet[self.rng.random_range(0..quiet.len())])
    }

    fn name(&self) -> &str {
        "Greedy"
    }

    fn color(&self) -> PieceColor {
        self.color
    }
}
