use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::trace;

use crate::game::{ConnectM, PieceColor};

use super::policy::Policy;

/// A policy that picks uniformly at random among droppable columns.
pub struct RandomPolicy {
    color: PieceColor,
    opponent: PieceColor,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(color: PieceColor, opponent: PieceColor) -> Self {
        RandomPolicy {
            color,
            opponent,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests and reproducible simulations.
    pub fn with_seed(color: PieceColor, opponent: PieceColor, seed: u64) -> Self {
        RandomPolicy {
            color,
            opponent,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn suggest_move(&mut self, board: &dyn ConnectM) -> Option<usize> {
        let columns = board.droppable_columns();
        if columns.is_empty() {
            return None;
        }
        let col = columns[self.rng.random_range(0..columns.len())];
        trace!(
            col,
            color = self.color.name(),
            opponent = self.opponent.name(),
            "random move"
        );
        Some(col)
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn color(&self) -> PieceColor {
        self.color
    }
}
