use anyhow::Result;

use tennis_stats::cli::Command;
use tennis_stats::{handle_import, handle_probe, handle_serve, interpret};

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
        Command::Serve { port } => handle_serve(*port),
        Command::Import { dataset, path } => handle_import(*dataset, path),
        Command::Probe {
            attempts,
            delay_ms,
            urls,
        } => handle_probe(urls, *attempts, *delay_ms),
    }
}
