use anyhow::Result;

use playoff_site::cli::Command;
use playoff_site::{handle_completions, handle_generate, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Generate(args) => handle_generate(args),
        Command::Serve { port, dir } => handle_serve(*port, dir.clone()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
