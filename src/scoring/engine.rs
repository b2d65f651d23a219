use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::debug;

use super::pairing::Pairing;
use super::setup::LevelSetup;
use super::verdict::{MatchStatus, Verdict};
use crate::domain::{Color, GameRecord, PlayerId, PlayoffLevel, Score, TimeControl};
use crate::errors::ScoringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Unassigned,
    Pending(TimeControl),
    Drawn,
    Won { winner: Side, decided_in: TimeControl },
}

/// One player's recorded scores, keyed by time control and round index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ScoreCard {
    rounds: BTreeMap<TimeControl, BTreeMap<u32, Score>>,
}

impl ScoreCard {
    fn record(&mut self, game: &GameRecord, score: Score) -> Result<(), ScoringError> {
        let rounds = self.rounds.entry(game.time_control()).or_default();
        if rounds.insert(game.round_index(), score).is_some() {
            return Err(ScoringError::DuplicateRound {
                time_control: game.time_control(),
                round: game.round_index(),
            });
        }
        Ok(())
    }

    fn round_scores(&self, time_control: TimeControl) -> Vec<Score> {
        self.rounds
            .get(&time_control)
            .map(|rounds| rounds.values().copied().collect())
            .unwrap_or_default()
    }

    fn round_score(&self, time_control: TimeControl, round_index: u32) -> Option<Score> {
        self.rounds
            .get(&time_control)
            .and_then(|rounds| rounds.get(&round_index))
            .copied()
    }

    fn played(&self, time_control: TimeControl) -> u32 {
        self.rounds.get(&time_control).map_or(0, |rounds| rounds.len() as u32)
    }

    fn subtotal(&self, time_control: TimeControl) -> Score {
        self.rounds
            .get(&time_control)
            .map(|rounds| rounds.values().sum::<Score>())
            .unwrap_or_default()
    }

    fn armageddon(&self) -> Option<Score> {
        self.round_score(TimeControl::Armageddon, 0)
    }

    fn total(&self) -> Score {
        self.rounds.values().flat_map(|rounds| rounds.values()).sum::<Score>()
    }
}

/// Scores and verdict of a single knockout match.
///
/// Built once from a pairing, its level setup and the games the two players
/// played at that level; every query afterwards is a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchScoring {
    level: PlayoffLevel,
    setup: LevelSetup,
    player1: Option<PlayerId>,
    player2: Option<PlayerId>,
    first: ScoreCard,
    second: ScoreCard,
    armageddon_white: Option<PlayerId>,
    armageddon_reached: bool,
    games_played: usize,
    outcome: Outcome,
}

impl MatchScoring {
    pub fn evaluate(
        pairing: &Pairing,
        setup: &LevelSetup,
        games: &[GameRecord],
    ) -> Result<Self, ScoringError> {
        validate_pairing(pairing)?;

        let mut first = ScoreCard::default();
        let mut second = ScoreCard::default();
        let mut armageddon_game = None;
        let mut games_played = 0;

        for game in games {
            check_round_range(game, setup)?;
            for (side, score) in assign_sides(pairing, game)? {
                match side {
                    Side::First => first.record(game, score)?,
                    Side::Second => second.record(game, score)?,
                }
            }
            if game.time_control().is_tier() {
                games_played += 1;
            } else {
                armageddon_game = Some(game);
            }
        }

        let armageddon_white = resolve_armageddon_white(pairing, armageddon_game)?;
        let (outcome, armageddon_reached) =
            decide(pairing, setup, &first, &second, armageddon_game);

        let scoring = Self {
            level: pairing.level,
            setup: *setup,
            player1: pairing.player1.clone(),
            player2: pairing.player2.clone(),
            first,
            second,
            armageddon_white,
            armageddon_reached,
            games_played,
            outcome,
        };
        debug!(
            "Scored {} match {:?} vs {:?}: {:?}",
            scoring.level,
            scoring.player1,
            scoring.player2,
            scoring.status()
        );
        Ok(scoring)
    }

    pub fn level(&self) -> PlayoffLevel {
        self.level
    }

    pub fn setup(&self) -> &LevelSetup {
        &self.setup
    }

    pub fn player1(&self) -> Option<&PlayerId> {
        self.player1.as_ref()
    }

    pub fn player2(&self) -> Option<&PlayerId> {
        self.player2.as_ref()
    }

    pub fn are_both_players_assigned(&self) -> bool {
        self.player1.is_some() && self.player2.is_some()
    }

    /// Number of classic, rapid and blitz games recorded for this match
    pub fn games_played(&self) -> usize {
        self.games_played
    }

    /// Scores of the rounds played so far, in round order. Unplayed rounds
    /// are left out rather than reported as zero.
    pub fn round_scores(
        &self,
        player: &PlayerId,
        time_control: TimeControl,
    ) -> Result<Vec<Score>, ScoringError> {
        Ok(self.card(player)?.round_scores(time_control))
    }

    /// Score of one zero-based round, `None` while that round is unplayed.
    pub fn round_score(
        &self,
        player: &PlayerId,
        time_control: TimeControl,
        round_index: u32,
    ) -> Result<Option<Score>, ScoringError> {
        Ok(self.card(player)?.round_score(time_control, round_index))
    }

    /// Armageddon colour, known only once the armageddon has been reached.
    pub fn armageddon_color(&self, player: &PlayerId) -> Result<Option<Color>, ScoringError> {
        self.card(player)?;
        if !self.armageddon_reached {
            return Ok(None);
        }
        Ok(self.armageddon_white.as_ref().map(|white| {
            if white == player {
                Color::White
            } else {
                Color::Black
            }
        }))
    }

    /// Raw armageddon game score, present once the game has been recorded.
    pub fn armageddon_score(&self, player: &PlayerId) -> Result<Option<Score>, ScoringError> {
        Ok(self.card(player)?.armageddon())
    }

    /// Sum of every recorded score, armageddon included. Display only; the
    /// verdict comes from tier-by-tier escalation.
    pub fn total_score(&self, player: &PlayerId) -> Result<Score, ScoringError> {
        Ok(self.card(player)?.total())
    }

    pub fn verdict(&self, player: &PlayerId) -> Result<Verdict, ScoringError> {
        let side = self.side_of(player)?;
        Ok(match self.outcome {
            Outcome::Won { winner, .. } if winner == side => Verdict::Win,
            Outcome::Won { .. } => Verdict::Lose,
            _ => Verdict::Undetermined,
        })
    }

    /// True when all tiers finished level and the level has an armageddon,
    /// whether or not it has been played yet.
    pub fn armageddon_reached(&self) -> bool {
        self.armageddon_reached
    }

    pub fn status(&self) -> MatchStatus {
        match &self.outcome {
            Outcome::Unassigned => MatchStatus::Unassigned,
            Outcome::Pending(awaiting) => MatchStatus::InProgress { awaiting: *awaiting },
            Outcome::Drawn => MatchStatus::Drawn,
            Outcome::Won { winner, decided_in } => match self.player(*winner) {
                Some(winner) => MatchStatus::Decided {
                    winner: winner.clone(),
                    decided_in: *decided_in,
                },
                None => MatchStatus::Unassigned,
            },
        }
    }

    fn player(&self, side: Side) -> Option<&PlayerId> {
        match side {
            Side::First => self.player1.as_ref(),
            Side::Second => self.player2.as_ref(),
        }
    }

    fn side_of(&self, player: &PlayerId) -> Result<Side, ScoringError> {
        if self.player1.as_ref() == Some(player) {
            Ok(Side::First)
        } else if self.player2.as_ref() == Some(player) {
            Ok(Side::Second)
        } else {
            Err(ScoringError::UnknownPlayer(player.clone()))
        }
    }

    fn card(&self, player: &PlayerId) -> Result<&ScoreCard, ScoringError> {
        Ok(match self.side_of(player)? {
            Side::First => &self.first,
            Side::Second => &self.second,
        })
    }
}

fn validate_pairing(pairing: &Pairing) -> Result<(), ScoringError> {
    if let (Some(p1), Some(p2)) = (&pairing.player1, &pairing.player2) {
        if p1 == p2 {
            return Err(ScoringError::SamePlayerTwice(p1.clone()));
        }
    }
    match &pairing.armageddon_white {
        Some(white) if !pairing.contains(white) => Err(ScoringError::ForeignPlayer(white.clone())),
        _ => Ok(()),
    }
}

fn check_round_range(game: &GameRecord, setup: &LevelSetup) -> Result<(), ScoringError> {
    let configured = setup.rounds(game.time_control());
    if game.round_index() >= configured {
        return Err(ScoringError::RoundOutOfRange {
            time_control: game.time_control(),
            round: game.round_index(),
            configured,
        });
    }
    Ok(())
}

/// Map the game's participants onto pairing slots.
///
/// With both slots filled the game must be between exactly those two
/// players; with one slot open it only has to involve the assigned one.
fn assign_sides(pairing: &Pairing, game: &GameRecord) -> Result<Vec<(Side, Score)>, ScoringError> {
    let mut sides = Vec::with_capacity(2);
    let mut strangers = 0;

    for participant in [game.white(), game.black()] {
        let side = if pairing.player1.as_ref() == Some(participant) {
            Some(Side::First)
        } else if pairing.player2.as_ref() == Some(participant) {
            Some(Side::Second)
        } else {
            None
        };
        match (side, game.score_of(participant)) {
            (Some(side), Some(score)) => sides.push((side, score)),
            _ => strangers += 1,
        }
    }

    let foreign = sides.is_empty() || (pairing.is_complete() && strangers > 0);
    if foreign {
        return Err(ScoringError::ForeignGame {
            time_control: game.time_control(),
            round: game.round_index(),
            white: game.white().clone(),
            black: game.black().clone(),
        });
    }
    Ok(sides)
}

fn resolve_armageddon_white(
    pairing: &Pairing,
    armageddon_game: Option<&GameRecord>,
) -> Result<Option<PlayerId>, ScoringError> {
    match (&pairing.armageddon_white, armageddon_game) {
        (Some(assigned), Some(game)) if assigned != game.white() => {
            Err(ScoringError::ConflictingArmageddonColours {
                assigned: assigned.clone(),
                played: game.white().clone(),
            })
        }
        (_, Some(game)) => Ok(Some(game.white().clone())),
        (assigned, None) => Ok(assigned.clone()),
    }
}

/// Walk the tiers in escalation order and stop at the first decision.
///
/// Returns the outcome and whether the armageddon stage was reached.
fn decide(
    pairing: &Pairing,
    setup: &LevelSetup,
    first: &ScoreCard,
    second: &ScoreCard,
    armageddon_game: Option<&GameRecord>,
) -> (Outcome, bool) {
    if !pairing.is_complete() {
        return (Outcome::Unassigned, false);
    }

    let mut first_total = Score::ZERO;
    let mut second_total = Score::ZERO;

    for tier in TimeControl::TIERS {
        let configured = setup.rounds(tier);
        if configured == 0 {
            continue;
        }
        if first.played(tier) < configured {
            return (Outcome::Pending(tier), false);
        }

        first_total += first.subtotal(tier);
        second_total += second.subtotal(tier);

        if let Some(winner) = leader(first_total, second_total) {
            return (Outcome::Won { winner, decided_in: tier }, false);
        }
    }

    if !setup.has_armageddon() {
        return (Outcome::Drawn, false);
    }

    let outcome = match (armageddon_game, first.armageddon(), second.armageddon()) {
        (Some(game), Some(a), Some(b)) => {
            let winner = leader(a, b).unwrap_or_else(|| black_side(pairing, game));
            Outcome::Won {
                winner,
                decided_in: TimeControl::Armageddon,
            }
        }
        _ => Outcome::Pending(TimeControl::Armageddon),
    };
    (outcome, true)
}

fn leader(first: Score, second: Score) -> Option<Side> {
    match first.cmp(&second) {
        Ordering::Greater => Some(Side::First),
        Ordering::Less => Some(Side::Second),
        Ordering::Equal => None,
    }
}

/// Draw odds: a drawn armageddon goes to the player who had black.
fn black_side(pairing: &Pairing, game: &GameRecord) -> Side {
    if pairing.player1.as_ref() == Some(game.black()) {
        Side::First
    } else {
        Side::Second
    }
}
