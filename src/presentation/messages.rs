use crate::config::Locale;
use crate::domain::{Color, PlayoffLevel};

/// Display strings for one language
#[derive(Debug)]
pub struct Messages {
    pub header_player: &'static str,
    pub header_classic_round: &'static str,
    pub header_rapid_round: &'static str,
    pub header_blitz_round: &'static str,
    pub header_armageddon: &'static str,
    pub header_total_score: &'static str,
    pub header_win: &'static str,
    pub armageddon_white: &'static str,
    pub armageddon_black: &'static str,
    pub arbiter: &'static str,
    pub deputy_arbiters: &'static str,
    pub game_writers: &'static str,
    pub regulations: &'static str,
    pub start_day: &'static str,
    pub generated_at: &'static str,
    levels: [&'static str; 7],
}

static ENGLISH: Messages = Messages {
    header_player: "Player",
    header_classic_round: "C",
    header_rapid_round: "R",
    header_blitz_round: "B",
    header_armageddon: "Arm.",
    header_total_score: "Total",
    header_win: "Win",
    armageddon_white: "white",
    armageddon_black: "black",
    arbiter: "Arbiter",
    deputy_arbiters: "Deputy arbiters",
    game_writers: "Game records",
    regulations: "Regulations",
    start_day: "Start",
    generated_at: "Generated",
    levels: [
        "Round of 64",
        "Round of 32",
        "Round of 16",
        "Quarter-final",
        "Semi-final",
        "Third place match",
        "Final",
    ],
};

static RUSSIAN: Messages = Messages {
    header_player: "Участник",
    header_classic_round: "К",
    header_rapid_round: "Р",
    header_blitz_round: "Б",
    header_armageddon: "Арм.",
    header_total_score: "Очки",
    header_win: "Победа",
    armageddon_white: "белые",
    armageddon_black: "чёрные",
    arbiter: "Главный судья",
    deputy_arbiters: "Судьи",
    game_writers: "Запись партий",
    regulations: "Регламент",
    start_day: "Начало",
    generated_at: "Обновлено",
    levels: [
        "1/32 финала",
        "1/16 финала",
        "1/8 финала",
        "1/4 финала",
        "1/2 финала",
        "Матч за 3-е место",
        "Финал",
    ],
};

impl Messages {
    /// Catalog for the locale's language; English when unsupported.
    pub fn for_locale(locale: &Locale) -> &'static Messages {
        match locale.language.as_str() {
            "ru" => &RUSSIAN,
            _ => &ENGLISH,
        }
    }

    pub fn level_name(&self, level: PlayoffLevel) -> &'static str {
        let index = match level {
            PlayoffLevel::RoundOf64 => 0,
            PlayoffLevel::RoundOf32 => 1,
            PlayoffLevel::RoundOf16 => 2,
            PlayoffLevel::QuarterFinal => 3,
            PlayoffLevel::SemiFinal => 4,
            PlayoffLevel::ThirdPlace => 5,
            PlayoffLevel::Final => 6,
        };
        self.levels[index]
    }

    pub fn color_mark(&self, color: Color) -> &'static str {
        match color {
            Color::White => self.armageddon_white,
            Color::Black => self.armageddon_black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_selection() {
        let ru = Messages::for_locale(&Locale::resolve("ru_RU"));
        assert_eq!(ru.level_name(PlayoffLevel::Final), "Финал");
        assert_eq!(ru.color_mark(Color::Black), "чёрные");

        let fallback = Messages::for_locale(&Locale::resolve("fr_FR"));
        assert_eq!(fallback.level_name(PlayoffLevel::SemiFinal), "Semi-final");
    }
}
