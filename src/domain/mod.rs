mod game;
pub mod models;
mod score;

pub use game::GameRecord;
pub use models::*;
pub use score::Score;
