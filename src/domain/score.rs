use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A chess score counted in half points.
///
/// Single game scores are `0`, `½` or `1`; match totals are sums of those,
/// so integer half points keep every comparison exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u32);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const HALF: Score = Score(1);
    pub const ONE: Score = Score(2);

    pub const fn from_half_points(half_points: u32) -> Self {
        Score(half_points)
    }

    pub const fn half_points(self) -> u32 {
        self.0
    }

    /// Convert a decimal value, accepting only non-negative multiples of ½.
    pub fn from_f64(value: f64) -> Option<Self> {
        let doubled = value * 2.0;
        if !doubled.is_finite() || doubled < 0.0 || doubled.fract() != 0.0 {
            return None;
        }
        if doubled > u32::MAX as f64 {
            return None;
        }
        Some(Score(doubled as u32))
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// True for the three values a single game can produce.
    pub fn is_game_score(self) -> bool {
        self <= Score::ONE
    }

    /// The opponent's score for the same game. Only meaningful for game scores.
    pub fn complement(self) -> Score {
        Score(Score::ONE.0.saturating_sub(self.0))
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        Score(self.0 + rhs.0)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        self.0 += rhs.0;
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Score {
        iter.fold(Score::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Score> for Score {
    fn sum<I: Iterator<Item = &'a Score>>(iter: I) -> Score {
        iter.copied().sum()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 2;
        let half = self.0 % 2 == 1;
        match (whole, half) {
            (0, true) => f.write_str("½"),
            (w, true) => write!(f, "{}½", w),
            (w, false) => write!(f, "{}", w),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Score::from_f64(value).ok_or_else(|| {
            serde::de::Error::custom(format!("score must be a multiple of 0.5, got {}", value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_chess_notation() {
        assert_eq!(Score::ZERO.to_string(), "0");
        assert_eq!(Score::HALF.to_string(), "½");
        assert_eq!(Score::ONE.to_string(), "1");
        assert_eq!(Score::from_half_points(3).to_string(), "1½");
    }

    #[test]
    fn test_from_f64_rejects_non_half_values() {
        assert_eq!(Score::from_f64(0.5), Some(Score::HALF));
        assert_eq!(Score::from_f64(2.5), Some(Score::from_half_points(5)));
        assert_eq!(Score::from_f64(0.3), None);
        assert_eq!(Score::from_f64(-1.0), None);
        assert_eq!(Score::from_f64(f64::NAN), None);
    }

    #[test]
    fn test_sums_stay_exact() {
        let total: Score = [Score::HALF, Score::HALF, Score::ONE].iter().sum();
        assert_eq!(total, Score::from_half_points(4));
        assert_eq!(Score::HALF.complement(), Score::HALF);
        assert_eq!(Score::ONE.complement(), Score::ZERO);
    }

    #[test]
    fn test_deserialize_from_json_number() {
        let score: Score = serde_json::from_str("0.5").unwrap();
        assert_eq!(score, Score::HALF);
        assert!(serde_json::from_str::<Score>("0.25").is_err());
    }
}
