use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::services::Dataset;

#[derive(Parser, Debug)]
#[command(author, version, about = "tennis statistics backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the statistics API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Replace one dataset in the database with the contents of a file
    Import {
        /// Dataset to replace
        #[arg(value_enum)]
        dataset: Dataset,
        /// Source file (rankings also accept a directory of CSV files)
        path: PathBuf,
    },
    /// Request URLs repeatedly and report status, X-Cache header and latency
    Probe {
        /// Requests per URL (defaults to 10)
        #[arg(short, long)]
        attempts: Option<usize>,
        /// Pause between requests in milliseconds (defaults to 500)
        #[arg(short, long)]
        delay_ms: Option<u64>,
        /// URLs to probe
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_takes_kebab_case_dataset() {
        let cli = Cli::try_parse_from(["tennis_stats", "import", "ranking-tables", "tables.csv"]).unwrap();

        assert_eq!(
            cli.command,
            Command::Import {
                dataset: Dataset::RankingTables,
                path: PathBuf::from("tables.csv"),
            }
        );
    }

    #[test]
    fn test_probe_requires_a_url() {
        assert!(Cli::try_parse_from(["tennis_stats", "probe"]).is_err());

        let cli = Cli::try_parse_from(["tennis_stats", "probe", "-a", "3", "http://localhost:3000/api/forecasts"]).unwrap();
        assert!(matches!(cli.command, Command::Probe { attempts: Some(3), delay_ms: None, .. }));
    }

    #[test]
    fn test_serve_defaults_to_port_3000() {
        let cli = Cli::try_parse_from(["tennis_stats", "serve"]).unwrap();

        assert_eq!(cli.command, Command::Serve { port: 3000 });
    }
}
