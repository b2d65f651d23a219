use anyhow::{Result, ensure};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{GameRecord, PlayerId, PlayoffLevel, Score, TimeControl};
use crate::scoring::{Pairing, PlayoffSetup};

/// Tournament description file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDescription {
    pub tournament_id: String,
    pub tournament_title: String,
    #[serde(default)]
    pub arbiter: Option<String>,
    #[serde(default)]
    pub deputy_arbiters: Vec<String>,
    #[serde(default)]
    pub game_writers: Vec<String>,
    #[serde(default)]
    pub regulations: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    pub players: Vec<PlayerId>,
    #[serde(default)]
    pub joined_players: Vec<PlayerId>,
    #[serde(default)]
    pub start_day: Option<NaiveDate>,
    pub tournament_setup: TournamentSetup,
}

impl TournamentDescription {
    pub fn playoff_setup(&self) -> &PlayoffSetup {
        match &self.tournament_setup {
            TournamentSetup::Playoff(setup) => setup,
        }
    }

    /// Link to the round robin stage that seeded the playoff, if published
    pub fn round_robin_link(&self) -> Option<&Link> {
        self.links.iter().find(|link| link.purpose == "roundrobin")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TournamentSetup {
    Playoff(PlayoffSetup),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub purpose: String,
    pub name: String,
    pub value: String,
}

/// One entry of the games file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEntry {
    pub level: PlayoffLevel,
    pub time_control: TimeControl,
    /// One-based, as shown in the table header
    pub round: u32,
    pub white: PlayerId,
    pub black: PlayerId,
    pub white_score: Score,
}

impl GameEntry {
    pub fn to_record(&self) -> Result<GameRecord> {
        ensure!(
            self.round >= 1,
            "{} {} game between {} and {} has round 0; rounds start at 1",
            self.level,
            self.time_control,
            self.white,
            self.black
        );
        let record = GameRecord::new(
            self.time_control,
            self.round - 1,
            self.white.clone(),
            self.black.clone(),
            self.white_score,
        )?;
        Ok(record)
    }
}

/// One entry of the level pairings file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingEntry {
    pub level: PlayoffLevel,
    #[serde(default, deserialize_with = "optional_player")]
    pub player1: Option<PlayerId>,
    #[serde(default, deserialize_with = "optional_player")]
    pub player2: Option<PlayerId>,
    #[serde(default, deserialize_with = "optional_player")]
    pub armageddon_white: Option<PlayerId>,
}

impl From<PairingEntry> for Pairing {
    fn from(entry: PairingEntry) -> Self {
        Pairing {
            level: entry.level,
            player1: entry.player1,
            player2: entry.player2,
            armageddon_white: entry.armageddon_white,
        }
    }
}

/// Pre-computed Elo rating, consumed as-is
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingEntry {
    pub player_id: PlayerId,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Unresolved bracket slots come as `null`, a missing key or `""`.
fn optional_player<'de, D>(deserializer: D) -> Result<Option<PlayerId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(id) if !id.trim().is_empty() => PlayerId::new(id)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_entry_treats_blank_slots_as_unassigned() {
        let json = r#"{"level": "final", "player1": "ivanov", "player2": ""}"#;
        let entry: PairingEntry = serde_json::from_str(json).unwrap();
        let pairing = Pairing::from(entry);

        assert_eq!(pairing.player1, Some(PlayerId::new("ivanov").unwrap()));
        assert_eq!(pairing.player2, None);
        assert_eq!(pairing.armageddon_white, None);
    }

    #[test]
    fn test_game_entry_converts_round_to_index() {
        let json = r#"{"level": "semi_final", "timeControl": "rapid", "round": 2,
                       "white": "a", "black": "b", "whiteScore": 0.5}"#;
        let entry: GameEntry = serde_json::from_str(json).unwrap();
        let record = entry.to_record().unwrap();

        assert_eq!(record.round_index(), 1);
        assert_eq!(record.time_control(), TimeControl::Rapid);
        assert_eq!(record.black_score(), Score::HALF);
    }

    #[test]
    fn test_game_entry_rejects_round_zero() {
        let json = r#"{"level": "final", "timeControl": "classic", "round": 0,
                       "white": "a", "black": "b", "whiteScore": 1}"#;
        let entry: GameEntry = serde_json::from_str(json).unwrap();
        assert!(entry.to_record().is_err());
    }

    #[test]
    fn test_description_exposes_playoff_setup() {
        let json = r#"{
            "tournamentId": "cup-2019",
            "tournamentTitle": "Cup 2019",
            "players": ["a", "b"],
            "links": [{"purpose": "roundrobin", "name": "Group stage", "value": "../rr/index.html"}],
            "startDay": "2019-03-01",
            "tournamentSetup": {"type": "playoff", "levels": {"final": {"classicRounds": 2}}}
        }"#;
        let description: TournamentDescription = serde_json::from_str(json).unwrap();

        assert!(description.playoff_setup().level(PlayoffLevel::Final).is_some());
        assert_eq!(description.round_robin_link().unwrap().name, "Group stage");
        assert!(description.joined_players.is_empty());
    }
}
