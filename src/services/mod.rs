pub mod generation;
pub mod server;

pub use generation::{GenerationReport, GenerationService, MatchSummary};
pub use server::ServerService;
