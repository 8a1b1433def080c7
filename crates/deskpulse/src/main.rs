mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so JSON-mode stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Daily {
            date,
            rows,
            roster,
            data_dir,
            json,
        } => commands::daily::run(date, &rows, &roster, &data_dir, json),
        Commands::Synth {
            week,
            data_dir,
            seed,
        } => commands::synth::run(week.as_deref(), &data_dir, seed),
        Commands::Index { data_dir, json } => commands::index::run(&data_dir, json),
    }
}
