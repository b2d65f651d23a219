//! JSON fixtures feeding the generator: description, players, games,
//! pairings and the read-only Elo ratings.

mod reader;
pub mod records;
mod store;

pub use reader::{FixturePaths, read_json, read_json_opt};
pub use records::*;
pub use store::{PlayerDirectory, RatingBook, TournamentFixtures};
