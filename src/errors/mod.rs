use std::path::Path;

use thiserror::Error;

use crate::domain::{PlayerId, Score, TimeControl};

/// Failures raised by the match scoring engine.
///
/// Only misuse and inconsistent input end up here. Unplayed rounds,
/// unassigned bracket slots and an unreached armageddon are ordinary
/// states and are reported through the query results instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("player {0} is not part of this pairing")]
    UnknownPlayer(PlayerId),

    #[error("player id must not be empty")]
    EmptyPlayerId,

    #[error("invalid single game score: {0}")]
    InvalidGameScore(Score),

    #[error("player {0} cannot play against themself")]
    SelfPlay(PlayerId),

    #[error("pairing lists player {0} in both slots")]
    SamePlayerTwice(PlayerId),

    #[error("{time_control} game in round {round} between {white} and {black} does not belong to this pairing")]
    ForeignGame {
        time_control: TimeControl,
        round: u32,
        white: PlayerId,
        black: PlayerId,
    },

    #[error("more than one {time_control} game recorded for round {round}")]
    DuplicateRound { time_control: TimeControl, round: u32 },

    #[error("{time_control} round {round} exceeds the {configured} configured rounds")]
    RoundOutOfRange {
        time_control: TimeControl,
        round: u32,
        configured: u32,
    },

    #[error("armageddon colour assigned to {0}, who is not part of this pairing")]
    ForeignPlayer(PlayerId),

    #[error("armageddon white was assigned to {assigned} but the game was played with {played} as white")]
    ConflictingArmageddonColours { assigned: PlayerId, played: PlayerId },
}

/// Add context to fixture read errors
pub fn read_context(kind: &str, path: &Path) -> String {
    format!("Failed to read {} from: {}", kind, path.display())
}

/// Add context to fixture parse errors
pub fn parse_context(kind: &str, path: &Path) -> String {
    format!("Failed to parse {} in: {}", kind, path.display())
}

/// Add context to output write errors
pub fn write_context(path: &Path) -> String {
    format!("Failed to write: {}", path.display())
}
