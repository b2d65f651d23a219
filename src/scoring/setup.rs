use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{PlayoffLevel, TimeControl};

/// Rounds played per time control at one playoff level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSetup {
    #[serde(default)]
    pub classic_rounds: u32,
    #[serde(default)]
    pub rapid_rounds: u32,
    #[serde(default)]
    pub blitz_rounds: u32,
    #[serde(default)]
    pub armageddon: bool,
}

impl LevelSetup {
    pub fn new(classic_rounds: u32, rapid_rounds: u32, blitz_rounds: u32, armageddon: bool) -> Self {
        Self {
            classic_rounds,
            rapid_rounds,
            blitz_rounds,
            armageddon,
        }
    }

    /// Configured rounds for a time control; an enabled armageddon is one round.
    pub fn rounds(&self, time_control: TimeControl) -> u32 {
        match time_control {
            TimeControl::Classic => self.classic_rounds,
            TimeControl::Rapid => self.rapid_rounds,
            TimeControl::Blitz => self.blitz_rounds,
            TimeControl::Armageddon => u32::from(self.armageddon),
        }
    }

    pub fn has_armageddon(&self) -> bool {
        self.armageddon
    }

    pub fn tier_rounds(&self) -> u32 {
        TimeControl::TIERS.iter().map(|&tc| self.rounds(tc)).sum()
    }

    /// A level with no rounds and no decider can never produce a result.
    pub fn can_produce_result(&self) -> bool {
        self.tier_rounds() > 0 || self.armageddon
    }
}

/// Tournament-wide playoff configuration keyed by level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayoffSetup {
    #[serde(default)]
    pub levels: BTreeMap<PlayoffLevel, LevelSetup>,
}

impl PlayoffSetup {
    pub fn level(&self, level: PlayoffLevel) -> Option<&LevelSetup> {
        self.levels.get(&level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_per_time_control() {
        let setup = LevelSetup::new(2, 2, 4, true);
        assert_eq!(setup.rounds(TimeControl::Classic), 2);
        assert_eq!(setup.rounds(TimeControl::Blitz), 4);
        assert_eq!(setup.rounds(TimeControl::Armageddon), 1);
        assert_eq!(setup.tier_rounds(), 8);
        assert_eq!(LevelSetup::new(2, 0, 0, false).rounds(TimeControl::Armageddon), 0);
    }

    #[test]
    fn test_empty_level_cannot_produce_result() {
        assert!(!LevelSetup::default().can_produce_result());
        assert!(LevelSetup::new(0, 0, 0, true).can_produce_result());
    }

    #[test]
    fn test_playoff_setup_from_json() {
        let json = r#"{"levels": {"final": {"classicRounds": 2, "rapidRounds": 2, "armageddon": true}}}"#;
        let setup: PlayoffSetup = serde_json::from_str(json).unwrap();
        let final_setup = setup.level(PlayoffLevel::Final).unwrap();
        assert_eq!(*final_setup, LevelSetup::new(2, 2, 0, true));
        assert!(setup.level(PlayoffLevel::SemiFinal).is_none());
    }
}
