use crate::domain::{PlayerId, PlayoffLevel};

/// The two bracket slots of a match at one playoff level.
///
/// Either slot may still be empty while the previous level is undecided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub level: PlayoffLevel,
    pub player1: Option<PlayerId>,
    pub player2: Option<PlayerId>,
    /// Player given white in the armageddon, when drawn in advance
    pub armageddon_white: Option<PlayerId>,
}

impl Pairing {
    pub fn new(level: PlayoffLevel, player1: Option<PlayerId>, player2: Option<PlayerId>) -> Self {
        Self {
            level,
            player1,
            player2,
            armageddon_white: None,
        }
    }

    pub fn with_armageddon_white(mut self, player: PlayerId) -> Self {
        self.armageddon_white = Some(player);
        self
    }

    pub fn is_complete(&self) -> bool {
        self.player1.is_some() && self.player2.is_some()
    }

    /// Assigned identities in slot order
    pub fn assigned(&self) -> impl Iterator<Item = &PlayerId> {
        self.player1.iter().chain(self.player2.iter())
    }

    pub fn contains(&self, player: &PlayerId) -> bool {
        self.assigned().any(|p| p == player)
    }
}
