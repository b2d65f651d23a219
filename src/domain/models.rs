use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;

/// Opaque, stable player identity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Result<Self, ScoringError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ScoringError::EmptyPlayerId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerId {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PlayerId::new(value)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registered participant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

/// Time control of a single game.
///
/// Classic, Rapid and Blitz are the round tiers, consulted in that order.
/// Armageddon is the single sudden-death decider after the tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeControl {
    Classic,
    Rapid,
    Blitz,
    Armageddon,
}

impl TimeControl {
    pub const TIERS: [TimeControl; 3] = [TimeControl::Classic, TimeControl::Rapid, TimeControl::Blitz];

    pub fn is_tier(self) -> bool {
        !matches!(self, TimeControl::Armageddon)
    }

    pub fn as_str(&self) -> &str {
        match self {
            TimeControl::Classic => "classic",
            TimeControl::Rapid => "rapid",
            TimeControl::Blitz => "blitz",
            TimeControl::Armageddon => "armageddon",
        }
    }
}

impl fmt::Display for TimeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bracket level of a knockout tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayoffLevel {
    #[serde(rename = "round_of_64")]
    RoundOf64,
    #[serde(rename = "round_of_32")]
    RoundOf32,
    #[serde(rename = "round_of_16")]
    RoundOf16,
    #[serde(rename = "quarter_final")]
    QuarterFinal,
    #[serde(rename = "semi_final")]
    SemiFinal,
    #[serde(rename = "third_place")]
    ThirdPlace,
    #[serde(rename = "final")]
    Final,
}

impl PlayoffLevel {
    pub fn as_str(&self) -> &str {
        match self {
            PlayoffLevel::RoundOf64 => "round_of_64",
            PlayoffLevel::RoundOf32 => "round_of_32",
            PlayoffLevel::RoundOf16 => "round_of_16",
            PlayoffLevel::QuarterFinal => "quarter_final",
            PlayoffLevel::SemiFinal => "semi_final",
            PlayoffLevel::ThirdPlace => "third_place",
            PlayoffLevel::Final => "final",
        }
    }
}

impl fmt::Display for PlayoffLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_rejects_blank() {
        assert_eq!(PlayerId::new("  "), Err(ScoringError::EmptyPlayerId));
        assert!(serde_json::from_str::<PlayerId>("\"\"").is_err());
        assert_eq!(PlayerId::new("ivanov").unwrap().as_str(), "ivanov");
    }

    #[test]
    fn test_level_serde_names() {
        let level: PlayoffLevel = serde_json::from_str("\"quarter_final\"").unwrap();
        assert_eq!(level, PlayoffLevel::QuarterFinal);
        assert_eq!(serde_json::to_string(&PlayoffLevel::RoundOf16).unwrap(), "\"round_of_16\"");
    }

    #[test]
    fn test_tiers_exclude_armageddon() {
        assert!(TimeControl::TIERS.iter().all(|tc| tc.is_tier()));
        assert!(!TimeControl::Armageddon.is_tier());
    }
}
