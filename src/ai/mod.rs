//! Bots: the policy trait plus random and greedy (win / block / random)
//! strategies built only on the board's read-only queries.

mod greedy;
mod policy;
mod random;

pub use greedy::GreedyPolicy;
pub use policy::{Policy, PolicyKind};
pub use random::RandomPolicy;
