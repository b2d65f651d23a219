use std::fmt;

use crate::domain::{PlayerId, TimeControl};

/// Match result from one player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Win,
    Lose,
    Undetermined,
}

impl Verdict {
    pub fn as_str(&self) -> &str {
        match self {
            Verdict::Win => "win",
            Verdict::Lose => "lose",
            Verdict::Undetermined => "undetermined",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the match stands as a whole.
///
/// Separates the cases a per-player `Undetermined` folds together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStatus {
    /// At least one bracket slot is still empty
    Unassigned,
    /// Waiting for games in this time control
    InProgress { awaiting: TimeControl },
    /// Level over, scores level, no decider available
    Drawn,
    Decided {
        winner: PlayerId,
        decided_in: TimeControl,
    },
}

impl MatchStatus {
    pub fn is_decided(&self) -> bool {
        matches!(self, MatchStatus::Decided { .. })
    }
}
