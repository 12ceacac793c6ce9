use anyhow::Result;

use rateit::cli::Command;
use rateit::{
    handle_export, handle_search, handle_serve, handle_stats, handle_top_reviewers, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
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
        Command::Serve { port } => handle_serve(*port),
        Command::TopReviewers { limit } => handle_top_reviewers(*limit),
        Command::Search { query } => handle_search(query),
        Command::Stats => handle_stats(),
        Command::Export { dir } => handle_export(dir.as_deref()),
    }
}
