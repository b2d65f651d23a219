use super::messages::Messages;
use crate::domain::{PlayerId, PlayoffLevel, Score, TimeControl};
use crate::errors::ScoringError;
use crate::fixtures::{PlayerDirectory, RatingBook};
use crate::scoring::{LevelSetup, MatchScoring, MatchStatus, Verdict};

#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(String),
    Score(Score),
    /// Nothing to show yet; rendered blank, unlike a zero score
    NoScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Player,
    Score,
}

impl CellStyle {
    pub fn as_class(&self) -> &str {
        match self {
            CellStyle::Player => "text-center fixed-square-player",
            CellStyle::Score => "text-center fixed-square-score",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub content: CellContent,
    pub style: CellStyle,
}

impl CellView {
    fn player(name: String) -> Self {
        Self {
            content: CellContent::Text(name),
            style: CellStyle::Player,
        }
    }

    fn score(score: Score) -> Self {
        Self {
            content: CellContent::Score(score),
            style: CellStyle::Score,
        }
    }

    fn text(text: String) -> Self {
        Self {
            content: CellContent::Text(text),
            style: CellStyle::Score,
        }
    }

    fn no_score() -> Self {
        Self {
            content: CellContent::NoScore,
            style: CellStyle::Score,
        }
    }

    pub fn display(&self) -> String {
        match &self.content {
            CellContent::Text(text) => text.clone(),
            CellContent::Score(score) => score.to_string(),
            CellContent::NoScore => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRowView {
    pub cells: Vec<CellView>,
}

/// Table of one match: header plus one row per bracket slot
#[derive(Debug, Clone, PartialEq)]
pub struct LevelTableView {
    pub level: PlayoffLevel,
    pub level_description: String,
    pub header: Vec<String>,
    pub rows: Vec<PlayerRowView>,
    pub status: MatchStatus,
}

impl LevelTableView {
    pub fn build(
        scoring: &MatchScoring,
        players: &PlayerDirectory,
        ratings: Option<&RatingBook>,
        messages: &Messages,
    ) -> Result<Self, ScoringError> {
        let setup = scoring.setup();
        let slots = [scoring.player1(), scoring.player2()];

        let rows = if scoring.are_both_players_assigned() {
            slots
                .into_iter()
                .flatten()
                .map(|player| player_row(scoring, player, players, ratings, messages))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            slots
                .into_iter()
                .map(|player| empty_row(setup, player, players, ratings))
                .collect()
        };

        Ok(Self {
            level: scoring.level(),
            level_description: messages.level_name(scoring.level()).to_string(),
            header: header_row(setup, messages),
            rows,
            status: scoring.status(),
        })
    }
}

fn header_row(setup: &LevelSetup, messages: &Messages) -> Vec<String> {
    let mut header = vec![messages.header_player.to_string()];
    let labelled = [
        (TimeControl::Classic, messages.header_classic_round),
        (TimeControl::Rapid, messages.header_rapid_round),
        (TimeControl::Blitz, messages.header_blitz_round),
    ];
    for (time_control, label) in labelled {
        header.extend((1..=setup.rounds(time_control)).map(|round| format!("{}{}", label, round)));
    }
    if setup.has_armageddon() {
        header.push(messages.header_armageddon.to_string());
    }
    header.push(messages.header_total_score.to_string());
    header.push(messages.header_win.to_string());
    header
}

fn player_row(
    scoring: &MatchScoring,
    player: &PlayerId,
    players: &PlayerDirectory,
    ratings: Option<&RatingBook>,
    messages: &Messages,
) -> Result<PlayerRowView, ScoringError> {
    let setup = scoring.setup();
    let mut cells = vec![CellView::player(player_label(player, players, ratings))];

    for time_control in TimeControl::TIERS {
        for round_index in 0..setup.rounds(time_control) {
            cells.push(match scoring.round_score(player, time_control, round_index)? {
                Some(score) => CellView::score(score),
                None => CellView::no_score(),
            });
        }
    }

    if setup.has_armageddon() {
        cells.push(armageddon_cell(scoring, player, messages)?);
    }

    cells.push(CellView::score(scoring.total_score(player)?));
    cells.push(match scoring.verdict(player)? {
        Verdict::Win => CellView::score(Score::ONE),
        Verdict::Lose => CellView::score(Score::ZERO),
        Verdict::Undetermined => CellView::no_score(),
    });

    Ok(PlayerRowView { cells })
}

fn armageddon_cell(
    scoring: &MatchScoring,
    player: &PlayerId,
    messages: &Messages,
) -> Result<CellView, ScoringError> {
    let mark = scoring
        .armageddon_color(player)?
        .map(|color| format!(" ({})", messages.color_mark(color)))
        .unwrap_or_default();

    Ok(match scoring.armageddon_score(player)? {
        Some(score) => CellView::text(format!("{}{}", score, mark)),
        None => CellView::no_score(),
    })
}

fn empty_row(
    setup: &LevelSetup,
    player: Option<&PlayerId>,
    players: &PlayerDirectory,
    ratings: Option<&RatingBook>,
) -> PlayerRowView {
    let name = player
        .map(|p| player_label(p, players, ratings))
        .unwrap_or_default();
    let blanks = setup.tier_rounds() as usize + usize::from(setup.has_armageddon()) + 2;

    let mut cells = vec![CellView::player(name)];
    cells.extend(std::iter::repeat_with(CellView::no_score).take(blanks));
    PlayerRowView { cells }
}

fn player_label(player: &PlayerId, players: &PlayerDirectory, ratings: Option<&RatingBook>) -> String {
    let name = players.name_of(player.as_str());
    match ratings.and_then(|book| book.rating_of(player)) {
        Some(rating) => format!("{} ({})", name, rating.round()),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use crate::domain::{GameRecord, Player};
    use crate::fixtures::{RatingEntry, TournamentDescription};
    use crate::scoring::Pairing;

    fn id(s: &str) -> PlayerId {
        PlayerId::new(s).unwrap()
    }

    fn directory() -> PlayerDirectory {
        let description: TournamentDescription = serde_json::from_str(
            r#"{"tournamentId": "t", "tournamentTitle": "T", "players": ["p1", "p2"],
                "tournamentSetup": {"type": "playoff"}}"#,
        )
        .unwrap();
        let player = |id_: &str, first: &str, last: &str| Player {
            id: id(id_),
            first_name: first.to_string(),
            last_name: last.to_string(),
        };
        PlayerDirectory::registered(
            &description,
            vec![player("p1", "Ivan", "Petrov"), player("p2", "Oleg", "Sidorov")],
        )
    }

    fn english() -> &'static Messages {
        Messages::for_locale(&Locale::us())
    }

    fn displays(row: &PlayerRowView) -> Vec<String> {
        row.cells.iter().map(CellView::display).collect()
    }

    #[test]
    fn test_header_follows_level_setup() {
        let header = header_row(&LevelSetup::new(2, 1, 0, true), english());
        assert_eq!(header, vec!["Player", "C1", "C2", "R1", "Arm.", "Total", "Win"]);
    }

    #[test]
    fn test_rows_for_decided_match() {
        let setup = LevelSetup::new(2, 2, 0, false);
        let pairing = Pairing::new(PlayoffLevel::Final, Some(id("p1")), Some(id("p2")));
        let games = vec![
            GameRecord::new(TimeControl::Classic, 0, id("p1"), id("p2"), Score::ONE).unwrap(),
            GameRecord::new(TimeControl::Classic, 1, id("p2"), id("p1"), Score::HALF).unwrap(),
        ];
        let scoring = MatchScoring::evaluate(&pairing, &setup, &games).unwrap();
        let view = LevelTableView::build(&scoring, &directory(), None, english()).unwrap();

        assert_eq!(view.level_description, "Final");
        assert_eq!(displays(&view.rows[0]), vec!["Ivan Petrov", "1", "½", "", "", "1½", "1"]);
        assert_eq!(displays(&view.rows[1]), vec!["Oleg Sidorov", "0", "½", "", "", "½", "0"]);
        assert_eq!(view.rows[1].cells[3].content, CellContent::NoScore);
        assert_eq!(view.rows[0].cells[0].style, CellStyle::Player);
    }

    #[test]
    fn test_armageddon_cell_shows_colour() {
        let setup = LevelSetup::new(1, 0, 0, true);
        let pairing = Pairing::new(PlayoffLevel::Final, Some(id("p1")), Some(id("p2")));
        let games = vec![
            GameRecord::new(TimeControl::Classic, 0, id("p1"), id("p2"), Score::HALF).unwrap(),
            GameRecord::new(TimeControl::Armageddon, 0, id("p1"), id("p2"), Score::HALF).unwrap(),
        ];
        let scoring = MatchScoring::evaluate(&pairing, &setup, &games).unwrap();
        let view = LevelTableView::build(&scoring, &directory(), None, english()).unwrap();

        assert_eq!(displays(&view.rows[0]), vec!["Ivan Petrov", "½", "½ (white)", "1", "0"]);
        assert_eq!(displays(&view.rows[1]), vec!["Oleg Sidorov", "½", "½ (black)", "1", "1"]);
    }

    #[test]
    fn test_skipped_round_stays_under_its_header() {
        let setup = LevelSetup::new(3, 0, 0, false);
        let pairing = Pairing::new(PlayoffLevel::Final, Some(id("p1")), Some(id("p2")));
        let games = vec![
            GameRecord::new(TimeControl::Classic, 0, id("p1"), id("p2"), Score::HALF).unwrap(),
            GameRecord::new(TimeControl::Classic, 2, id("p2"), id("p1"), Score::ZERO).unwrap(),
        ];
        let scoring = MatchScoring::evaluate(&pairing, &setup, &games).unwrap();
        let view = LevelTableView::build(&scoring, &directory(), None, english()).unwrap();

        assert_eq!(view.header[1..4], ["C1", "C2", "C3"]);
        assert_eq!(displays(&view.rows[0]), vec!["Ivan Petrov", "½", "", "1", "1½", ""]);
        assert_eq!(displays(&view.rows[1]), vec!["Oleg Sidorov", "½", "", "0", "½", ""]);
    }

    #[test]
    fn test_second_slot_only_renders_blank_first_row() {
        let setup = LevelSetup::new(1, 1, 0, false);
        let pairing = Pairing::new(PlayoffLevel::Final, None, Some(id("p2")));
        let scoring = MatchScoring::evaluate(&pairing, &setup, &[]).unwrap();
        let view = LevelTableView::build(&scoring, &directory(), None, english()).unwrap();

        assert_eq!(view.status, MatchStatus::Unassigned);
        assert_eq!(displays(&view.rows[0]), vec!["", "", "", "", ""]);
        assert_eq!(displays(&view.rows[1]), vec!["Oleg Sidorov", "", "", "", ""]);
        assert_eq!(view.rows[1].cells.len(), view.header.len());
    }

    #[test]
    fn test_rating_label_rounds_half_up() {
        let ratings = RatingBook::from_entries(
            vec![RatingEntry { player_id: id("p1"), rating: Some(1622.5) }],
            1500.0,
        );
        assert_eq!(player_label(&id("p1"), &directory(), Some(&ratings)), "Ivan Petrov (1623)");
    }

    #[test]
    fn test_unassigned_pairing_renders_blank_rows() {
        let setup = LevelSetup::new(2, 0, 0, true);
        let pairing = Pairing::new(PlayoffLevel::Final, Some(id("p1")), None);
        let scoring = MatchScoring::evaluate(&pairing, &setup, &[]).unwrap();
        let ratings = RatingBook::from_entries(
            vec![RatingEntry { player_id: id("p1"), rating: Some(1623.4) }],
            1500.0,
        );
        let view = LevelTableView::build(&scoring, &directory(), Some(&ratings), english()).unwrap();

        assert_eq!(view.status, MatchStatus::Unassigned);
        assert_eq!(displays(&view.rows[0]), vec!["Ivan Petrov (1623)", "", "", "", "", ""]);
        assert_eq!(displays(&view.rows[1]), vec!["", "", "", "", "", ""]);
        assert_eq!(view.rows[0].cells.len(), view.header.len());
    }
}
