use std::collections::HashMap;

use anyhow::Result;
use log::{info, warn};

use super::reader::{FixturePaths, read_json, read_json_opt};
use super::records::{GameEntry, PairingEntry, RatingEntry, TournamentDescription};
use crate::domain::{GameRecord, Player, PlayerId, PlayoffLevel};
use crate::scoring::Pairing;

/// Registered players in display order
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: Vec<Player>,
}

impl PlayerDirectory {
    /// Keep registered players in description order, then joined players.
    /// Anyone listed in neither is dropped.
    pub fn registered(description: &TournamentDescription, all_players: Vec<Player>) -> Self {
        let mut by_id: HashMap<PlayerId, Player> =
            all_players.into_iter().map(|p| (p.id.clone(), p)).collect();

        let players = description
            .players
            .iter()
            .chain(description.joined_players.iter())
            .filter_map(|id| by_id.remove(id))
            .collect();

        Self { players }
    }

    /// Full name, or the raw id for someone not registered
    pub fn name_of(&self, id: &str) -> String {
        self.players
            .iter()
            .find(|p| p.id.as_str() == id)
            .map(Player::full_name)
            .unwrap_or_else(|| id.to_string())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Read-only view of the externally computed Elo ratings
#[derive(Debug, Clone, Default)]
pub struct RatingBook {
    ratings: HashMap<PlayerId, f64>,
}

impl RatingBook {
    pub fn from_entries(entries: Vec<RatingEntry>, default_rating: f64) -> Self {
        let ratings = entries
            .into_iter()
            .map(|e| (e.player_id, e.rating.unwrap_or(default_rating)))
            .collect();
        Self { ratings }
    }

    pub fn rating_of(&self, player: &PlayerId) -> Option<f64> {
        self.ratings.get(player).copied()
    }
}

/// A game tagged with the level it was played at
#[derive(Debug, Clone)]
struct LevelGame {
    level: PlayoffLevel,
    record: GameRecord,
}

/// Everything the generator needs, loaded once per run
#[derive(Debug, Clone)]
pub struct TournamentFixtures {
    pub description: TournamentDescription,
    pub players: PlayerDirectory,
    pub pairings: Vec<Pairing>,
    pub ratings: Option<RatingBook>,
    games: Vec<LevelGame>,
}

impl TournamentFixtures {
    pub fn load(paths: &FixturePaths, default_rating: f64) -> Result<Self> {
        let description: TournamentDescription = read_json(&paths.tournament, "tournament description")?;
        let all_players: Vec<Player> = read_json(&paths.players, "players")?;
        let game_entries: Vec<GameEntry> = read_json(&paths.games, "games")?;
        let pairing_entries: Vec<PairingEntry> = read_json(&paths.pairings, "level pairings")?;
        let rating_entries: Option<Vec<RatingEntry>> =
            read_json_opt(paths.ratings.as_deref(), "Elo ratings")?;

        let players = PlayerDirectory::registered(&description, all_players);
        info!("  → {} registered players", players.len());

        let games = convert_games(&game_entries)?;
        info!("  → {} recorded games", games.len());

        let pairings: Vec<Pairing> = pairing_entries.into_iter().map(Pairing::from).collect();
        info!("  → {} pairings", pairings.len());

        let ratings = rating_entries.map(|entries| RatingBook::from_entries(entries, default_rating));

        Ok(Self {
            description,
            players,
            pairings,
            ratings,
            games,
        })
    }

    pub fn from_parts(
        description: TournamentDescription,
        players: PlayerDirectory,
        pairings: Vec<Pairing>,
        games: Vec<(PlayoffLevel, GameRecord)>,
    ) -> Self {
        Self {
            description,
            players,
            pairings,
            ratings: None,
            games: games
                .into_iter()
                .map(|(level, record)| LevelGame { level, record })
                .collect(),
        }
    }

    /// Games of the pairing's level that involve one of its players
    pub fn games_for(&self, pairing: &Pairing) -> Vec<GameRecord> {
        self.games
            .iter()
            .filter(|g| g.level == pairing.level)
            .filter(|g| pairing.assigned().any(|p| g.record.involves(p)))
            .map(|g| g.record.clone())
            .collect()
    }
}

fn convert_games(entries: &[GameEntry]) -> Result<Vec<LevelGame>> {
    let mut games = Vec::with_capacity(entries.len());
    for entry in entries {
        let record = entry.to_record()?;
        games.push(LevelGame {
            level: entry.level,
            record,
        });
    }
    if games.is_empty() {
        warn!("No games recorded yet; every match will render as pending");
    }
    Ok(games)
}
