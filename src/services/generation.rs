use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{AppConfig, Locale};
use crate::domain::PlayoffLevel;
use crate::errors::write_context;
use crate::fixtures::{FixturePaths, TournamentFixtures};
use crate::presentation::{IndexPage, LevelTableView, Messages, render_index, render_level_table};
use crate::scoring::{MatchScoring, MatchStatus, Pairing};

/// Outcome of one match, for the run summary
#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub level: PlayoffLevel,
    pub player1: Option<String>,
    pub player2: Option<String>,
    pub status: MatchStatus,
    pub winner: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub index_path: PathBuf,
    pub matches: Vec<MatchSummary>,
}

impl GenerationReport {
    pub fn decided(&self) -> usize {
        self.matches.iter().filter(|m| m.status.is_decided()).count()
    }
}

pub struct GenerationService {
    config: AppConfig,
    locale: Locale,
}

impl GenerationService {
    pub fn new(config: AppConfig) -> Self {
        let locale = Locale::resolve(&config.site.locale);
        Self { config, locale }
    }

    pub fn run(&self, paths: &FixturePaths) -> Result<GenerationReport> {
        info!("=== Generating Playoff Site ({}) ===\n", self.locale);

        // Step 1: Load fixtures
        info!("Step 1: Loading fixtures...");
        let fixtures = TournamentFixtures::load(paths, self.config.ratings.default_rating)?;

        // Step 2: Score every pairing and render the tables
        info!("Step 2: Scoring {} matches...", fixtures.pairings.len());
        let (index_html, matches) = self.render_site(&fixtures)?;
        info!(
            "  → {} decided, {} still open\n",
            matches.iter().filter(|m| m.status.is_decided()).count(),
            matches.iter().filter(|m| !m.status.is_decided()).count()
        );

        // Step 3: Write the index page
        info!("Step 3: Writing site...");
        let index_path = self.write_index(&index_html)?;
        info!("  → Wrote {}\n", index_path.display());

        info!("=== Generation Complete ===");
        Ok(GenerationReport { index_path, matches })
    }

    /// Render the index page for already loaded fixtures
    pub fn render_site(&self, fixtures: &TournamentFixtures) -> Result<(String, Vec<MatchSummary>)> {
        let messages = Messages::for_locale(&self.locale);

        let rendered = fixtures
            .pairings
            .par_iter()
            .map(|pairing| render_match(fixtures, pairing, messages))
            .collect::<Result<Vec<_>>>()?;

        let (tables, matches): (Vec<String>, Vec<MatchSummary>) = rendered.into_iter().unzip();

        let page = IndexPage::new(
            &fixtures.description,
            &fixtures.players,
            &self.locale.language,
            tables,
            Utc::now(),
        );
        Ok((render_index(&page, messages), matches))
    }

    fn write_index(&self, html: &str) -> Result<PathBuf> {
        let output_dir = &self.config.site.output_dir;
        fs::create_dir_all(output_dir).with_context(|| write_context(output_dir))?;

        let index_path = output_dir.join(self.config.site.index_file);
        write_atomically(&index_path, html)?;
        Ok(index_path)
    }
}

fn render_match(
    fixtures: &TournamentFixtures,
    pairing: &Pairing,
    messages: &Messages,
) -> Result<(String, MatchSummary)> {
    let scoring = score_pairing(fixtures, pairing)?;
    let view = LevelTableView::build(&scoring, &fixtures.players, fixtures.ratings.as_ref(), messages)?;
    Ok((render_level_table(&view), summarize(fixtures, &scoring)))
}

fn score_pairing(fixtures: &TournamentFixtures, pairing: &Pairing) -> Result<MatchScoring> {
    let setup = fixtures
        .description
        .playoff_setup()
        .level(pairing.level)
        .with_context(|| format!("No level setup configured for {}", pairing.level))?;

    if !setup.can_produce_result() {
        warn!("Level {} has no rounds configured", pairing.level);
    }

    let games = fixtures.games_for(pairing);
    MatchScoring::evaluate(pairing, setup, &games).with_context(|| {
        format!(
            "Inconsistent {} match {} vs {}",
            pairing.level,
            slot_label(pairing.player1.as_ref().map(|p| p.as_str())),
            slot_label(pairing.player2.as_ref().map(|p| p.as_str()))
        )
    })
}

fn summarize(fixtures: &TournamentFixtures, scoring: &MatchScoring) -> MatchSummary {
    let name = |id: &str| fixtures.players.name_of(id);
    let status = scoring.status();
    let winner = match &status {
        MatchStatus::Decided { winner, .. } => Some(name(winner.as_str())),
        _ => None,
    };

    MatchSummary {
        level: scoring.level(),
        player1: scoring.player1().map(|p| name(p.as_str())),
        player2: scoring.player2().map(|p| name(p.as_str())),
        status,
        winner,
    }
}

fn slot_label(player: Option<&str>) -> &str {
    player.unwrap_or("(unassigned)")
}

/// Write to a sibling temp file, then rename over the target
fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let temp_path = path.with_extension("html.tmp");

    if temp_path.exists() {
        fs::remove_file(&temp_path).with_context(|| write_context(&temp_path))?;
    }

    fs::write(&temp_path, contents).with_context(|| write_context(&temp_path))?;
    fs::rename(&temp_path, path).with_context(|| write_context(path))?;
    Ok(())
}
