use crate::game::{ConnectM, PieceColor};

use super::{GreedyPolicy, RandomPolicy};

/// Move-selection strategy for one side of a game.
///
/// A policy only reads the board through [`ConnectM::can_drop`] and
/// [`ConnectM::would_win`]; the driver applies the suggested column.
pub trait Policy {
    /// Suggest a column to drop into, or `None` if no column is droppable.
    fn suggest_move(&mut self, board: &dyn ConnectM) -> Option<usize>;

    /// Return the policy's display name.
    fn name(&self) -> &str;

    /// The color this policy plays.
    fn color(&self) -> PieceColor;
}

/// Selectable bot strategies, for config files and the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Uniformly random legal column
    Random,
    /// Win if possible, else block, else random
    Greedy,
}

impl PolicyKind {
    /// Build a boxed policy for `color` playing against `opponent`.
    /// A `seed` makes the policy's random choices reproducible.
    pub fn build(
        self,
        color: PieceColor,
        opponent: PieceColor,
        seed: Option<u64>,
    ) -> Box<dyn Policy + Send> {
        match (self, seed) {
            (PolicyKind::Random, Some(seed)) => {
                Box::new(RandomPolicy::with_seed(color, opponent, seed))
            }
            (PolicyKind::Random, None) => Box::new(RandomPolicy::new(color, opponent)),
            (PolicyKind::Greedy, Some(seed)) => {
                Box::new(GreedyPolicy::with_seed(color, opponent, seed))
            }
            (PolicyKind::Greedy, None) => Box::new(GreedyPolicy::new(color, opponent)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Random => "random",
            PolicyKind::Greedy => "greedy",
        }
    }
}
