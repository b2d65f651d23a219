use crate::domain::{Color, PlayerId, Score, TimeControl};
use crate::errors::ScoringError;

/// A finished game between two players.
///
/// Only the white score is stored; the black score is always its
/// complement, so the two add up to one point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    time_control: TimeControl,
    round_index: u32,
    white: PlayerId,
    black: PlayerId,
    white_score: Score,
}

impl GameRecord {
    pub fn new(
        time_control: TimeControl,
        round_index: u32,
        white: PlayerId,
        black: PlayerId,
        white_score: Score,
    ) -> Result<Self, ScoringError> {
        if !white_score.is_game_score() {
            return Err(ScoringError::InvalidGameScore(white_score));
        }
        if white == black {
            return Err(ScoringError::SelfPlay(white));
        }
        Ok(Self {
            time_control,
            round_index,
            white,
            black,
            white_score,
        })
    }

    pub fn time_control(&self) -> TimeControl {
        self.time_control
    }

    /// Zero-based round within the game's time control
    pub fn round_index(&self) -> u32 {
        self.round_index
    }

    pub fn white(&self) -> &PlayerId {
        &self.white
    }

    pub fn black(&self) -> &PlayerId {
        &self.black
    }

    pub fn white_score(&self) -> Score {
        self.white_score
    }

    pub fn black_score(&self) -> Score {
        self.white_score.complement()
    }

    pub fn involves(&self, player: &PlayerId) -> bool {
        &self.white == player || &self.black == player
    }

    pub fn color_of(&self, player: &PlayerId) -> Option<Color> {
        if &self.white == player {
            Some(Color::White)
        } else if &self.black == player {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn score_of(&self, player: &PlayerId) -> Option<Score> {
        self.color_of(player).map(|color| match color {
            Color::White => self.white_score(),
            Color::Black => self.black_score(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> PlayerId {
        PlayerId::new(s).unwrap()
    }

    #[test]
    fn test_scores_sum_to_one_point() {
        let game = GameRecord::new(TimeControl::Classic, 0, id("a"), id("b"), Score::HALF).unwrap();
        assert_eq!(game.white_score() + game.black_score(), Score::ONE);
        assert_eq!(game.score_of(&id("b")), Some(Score::HALF));
        assert_eq!(game.score_of(&id("c")), None);
    }

    #[test]
    fn test_rejects_invalid_games() {
        let too_much = GameRecord::new(TimeControl::Rapid, 0, id("a"), id("b"), Score::from_half_points(3));
        assert_eq!(too_much, Err(ScoringError::InvalidGameScore(Score::from_half_points(3))));

        let self_play = GameRecord::new(TimeControl::Rapid, 0, id("a"), id("a"), Score::ONE);
        assert_eq!(self_play, Err(ScoringError::SelfPlay(id("a"))));
    }

    #[test]
    fn test_color_lookup() {
        let game = GameRecord::new(TimeControl::Armageddon, 0, id("a"), id("b"), Score::ZERO).unwrap();
        assert_eq!(game.color_of(&id("a")), Some(Color::White));
        assert_eq!(game.color_of(&id("b")), Some(Color::Black));
        assert_eq!(game.score_of(&id("b")), Some(Score::ONE));
    }
}
