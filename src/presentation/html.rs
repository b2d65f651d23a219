use chrono::{DateTime, NaiveDate, Utc};

use super::level_table::LevelTableView;
use super::messages::Messages;
use crate::fixtures::{Link, PlayerDirectory, TournamentDescription};

/// Data shown on the tournament index page around the match tables
#[derive(Debug, Clone)]
pub struct IndexPage {
    pub tournament_id: String,
    pub tournament_title: String,
    pub language: String,
    pub arbiter: Option<String>,
    pub deputy_arbiters: String,
    pub game_writers: String,
    pub regulations: Option<String>,
    pub round_robin_link: Option<Link>,
    pub start_day: Option<NaiveDate>,
    pub generated_at: DateTime<Utc>,
    pub matches: Vec<String>,
}

impl IndexPage {
    /// Resolve officials' ids to names and attach the rendered match tables.
    pub fn new(
        description: &TournamentDescription,
        players: &PlayerDirectory,
        language: &str,
        matches: Vec<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let names = |ids: &[String]| {
            ids.iter()
                .map(|id| players.name_of(id))
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            tournament_id: description.tournament_id.clone(),
            tournament_title: description.tournament_title.clone(),
            language: language.to_string(),
            arbiter: description.arbiter.as_deref().map(|id| players.name_of(id)),
            deputy_arbiters: names(&description.deputy_arbiters),
            game_writers: names(&description.game_writers),
            regulations: description.regulations.clone(),
            round_robin_link: description.round_robin_link().cloned(),
            start_day: description.start_day,
            generated_at,
            matches,
        }
    }
}

pub fn render_level_table(view: &LevelTableView) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<div class=\"playoff-match level-{}\">\n",
        view.level.as_str()
    ));
    html.push_str(&format!("  <h3>{}</h3>\n", escape_html(&view.level_description)));
    html.push_str("  <table class=\"table table-bordered\">\n");

    html.push_str("    <thead><tr>");
    for label in &view.header {
        html.push_str(&format!("<th class=\"text-center\">{}</th>", escape_html(label)));
    }
    html.push_str("</tr></thead>\n");

    html.push_str("    <tbody>\n");
    for row in &view.rows {
        html.push_str("      <tr>");
        for cell in &row.cells {
            html.push_str(&format!(
                "<td class=\"{}\">{}</td>",
                cell.style.as_class(),
                escape_html(&cell.display())
            ));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("    </tbody>\n");

    html.push_str("  </table>\n");
    html.push_str("</div>\n");
    html
}

pub fn render_index(page: &IndexPage, messages: &Messages) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n", escape_html(&page.language)));
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str(&format!("  <title>{}</title>\n", escape_html(&page.tournament_title)));
    html.push_str("</head>\n");
    html.push_str(&format!(
        "<body data-tournament=\"{}\">\n",
        escape_html(&page.tournament_id)
    ));
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(&page.tournament_title)));

    html.push_str("<dl class=\"tournament-info\">\n");
    if let Some(start_day) = page.start_day {
        push_info(&mut html, messages.start_day, &start_day.format("%Y-%m-%d").to_string());
    }
    if let Some(arbiter) = &page.arbiter {
        push_info(&mut html, messages.arbiter, arbiter);
    }
    push_info(&mut html, messages.deputy_arbiters, &page.deputy_arbiters);
    push_info(&mut html, messages.game_writers, &page.game_writers);
    if let Some(regulations) = &page.regulations {
        push_info(&mut html, messages.regulations, regulations);
    }
    html.push_str("</dl>\n");

    if let Some(link) = &page.round_robin_link {
        html.push_str(&format!(
            "<p><a href=\"{}\">{}</a></p>\n",
            escape_html(&link.value),
            escape_html(&link.name)
        ));
    }

    for table in &page.matches {
        html.push_str(table);
    }

    html.push_str(&format!(
        "<footer>{}: {}</footer>\n",
        messages.generated_at,
        page.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    html.push_str("</body>\n</html>\n");
    html
}

fn push_info(html: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    html.push_str(&format!(
        "  <dt>{}</dt><dd>{}</dd>\n",
        escape_html(label),
        escape_html(value)
    ));
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
