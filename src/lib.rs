pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fixtures;
pub mod presentation;
pub mod scoring;
pub mod services;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;

use crate::cli::{Command, GenerateArgs};
use crate::config::AppConfig;
use crate::scoring::MatchStatus;
use crate::services::{GenerationReport, GenerationService, ServerService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_generate(args: &GenerateArgs) -> Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(locale) = &args.locale {
        config.site.locale = locale.clone();
    }
    if let Some(output) = &args.output {
        config.site.output_dir = output.clone();
    }

    let service = GenerationService::new(config);
    let report = service.run(&args.fixture_paths())?;
    print_summary(&report);
    Ok(())
}

pub fn handle_serve(port: Option<u16>, dir: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::from_env();
    let port = port.unwrap_or(config.server.port);
    let dir = dir.unwrap_or(config.site.output_dir);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, dir);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn print_summary(report: &GenerationReport) {
    for summary in &report.matches {
        let players = format!(
            "{} vs {}",
            summary.player1.as_deref().unwrap_or("?"),
            summary.player2.as_deref().unwrap_or("?")
        );
        let status = match &summary.status {
            MatchStatus::Decided { decided_in, .. } => format!(
                "{} won ({})",
                summary.winner.as_deref().unwrap_or("?"),
                decided_in
            )
            .green(),
            MatchStatus::InProgress { awaiting } => format!("awaiting {}", awaiting).yellow(),
            MatchStatus::Drawn => "drawn".cyan(),
            MatchStatus::Unassigned => "unassigned".dimmed(),
        };
        println!("{:<14} {:<40} {}", summary.level.as_str(), players, status);
    }
    println!(
        "{} of {} matches decided → {}",
        report.decided(),
        report.matches.len(),
        report.index_path.display().to_string().bold()
    );
}
