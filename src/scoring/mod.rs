//! Knockout match scoring: tier escalation, armageddon draw odds and verdicts.

mod engine;
mod pairing;
pub mod setup;
mod verdict;

pub use engine::MatchScoring;
pub use pairing::Pairing;
pub use setup::{LevelSetup, PlayoffSetup};
pub use verdict::{MatchStatus, Verdict};
