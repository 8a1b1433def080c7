use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "deskpulse")]
#[command(version)]
#[command(about = "Dashboard dataset builder for the support desk")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the daily snapshot for a target date
    Daily {
        /// Target date YYYY-MM-DD (default: yesterday)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Ticket-row snapshot exported from the ticket source
        #[arg(long, default_value = "data/source/tickets.json")]
        rows: PathBuf,

        /// Agent roster file (id to display name)
        #[arg(long, default_value = "data/source/agents.json")]
        roster: PathBuf,

        /// Data directory holding per-category documents
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Emit the document as JSON on stdout instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Backfill synthetic fixture data
    Synth {
        /// ISO week token YYYY-Www (default: the built-in backfill range)
        week: Option<String>,

        /// Data directory holding per-category documents
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Random seed for reproducible fixtures
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Rebuild index.json from the documents on disk
    Index {
        /// Data directory holding per-category documents
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Emit the index as JSON on stdout instead of a summary
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_index() {
        let cli = Cli::try_parse_from(["deskpulse", "index"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Index { .. }));
    }

    #[test]
    fn test_cli_parse_synth_week() {
        let cli = Cli::try_parse_from(["deskpulse", "synth", "2026-W05", "--seed", "7"]);
        assert!(cli.is_ok());
        if let Commands::Synth { week, seed, .. } = cli.unwrap().command {
            assert_eq!(week.as_deref(), Some("2026-W05"));
            assert_eq!(seed, 7);
        } else {
            panic!("Expected Synth command");
        }
    }

    #[test]
    fn test_cli_parse_daily_date() {
        let cli = Cli::try_parse_from(["deskpulse", "daily", "--date", "2026-01-26", "--json"]);
        assert!(cli.is_ok());
        if let Commands::Daily { date, json, .. } = cli.unwrap().command {
            assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 26));
            assert!(json);
        } else {
            panic!("Expected Daily command");
        }
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        let cli = Cli::try_parse_from(["deskpulse", "daily", "--date", "yesterday"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_default_data_dir() {
        let cli = Cli::try_parse_from(["deskpulse", "index"]).unwrap();
        if let Commands::Index { data_dir, .. } = cli.command {
            assert_eq!(data_dir, PathBuf::from("data"));
        } else {
            panic!("Expected Index command");
        }
    }
}
