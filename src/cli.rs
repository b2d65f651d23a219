use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::fixtures::FixturePaths;

#[derive(Parser, Debug)]
#[command(author, version, about = "playoff-site: knockout match tables for chess tournaments")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Score every pairing and write the tournament page
    Generate(GenerateArgs),
    /// Preview a generated site over HTTP
    Serve {
        /// Port number (defaults to 3000 or PLAYOFF_SITE_PORT)
        #[arg(short, long)]
        port: Option<u16>,
        /// Site directory (defaults to the generate output directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Tournament description JSON
    #[arg(long)]
    pub tournament: PathBuf,
    /// Players JSON
    #[arg(long)]
    pub players: PathBuf,
    /// Games JSON
    #[arg(long)]
    pub games: PathBuf,
    /// Level pairings JSON
    #[arg(long)]
    pub pairings: PathBuf,
    /// Pre-computed Elo ratings JSON (optional)
    #[arg(long)]
    pub ratings: Option<PathBuf>,
    /// Locale such as ru_RU (defaults to en_US or PLAYOFF_SITE_LOCALE)
    #[arg(short, long)]
    pub locale: Option<String>,
    /// Output directory (defaults to ./site or PLAYOFF_SITE_OUTPUT_DIR)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn fixture_paths(&self) -> FixturePaths {
        FixturePaths {
            tournament: self.tournament.clone(),
            players: self.players.clone(),
            games: self.games.clone(),
            pairings: self.pairings.clone(),
            ratings: self.ratings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "playoff-site",
            "generate",
            "--tournament",
            "t.json",
            "--players",
            "p.json",
            "--games",
            "g.json",
            "--pairings",
            "l.json",
            "-l",
            "ru_RU",
        ])
        .unwrap();

        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.locale.as_deref(), Some("ru_RU"));
        assert_eq!(args.output, None);
        assert_eq!(args.fixture_paths().ratings, None);
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["playoff-site", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: None, dir: None });
    }

    #[test]
    fn test_generate_requires_fixtures() {
        assert!(Cli::try_parse_from(["playoff-site", "generate", "--games", "g.json"]).is_err());
    }
}
