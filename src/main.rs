use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use semantik::config::Config;
use semantik::output::json::render_json;
use semantik::output::terminal;
use semantik::scoring::Comparator;

/// Semantik: advanced string similarity analysis.
///
/// Scores two strings with six lexical algorithms and an embedding-based
/// semantic comparison, each normalized to 0 (different) .. 1 (identical).
#[derive(Parser)]
#[command(name = "semantik", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two strings with every similarity method
    Compare {
        /// First string
        first: String,

        /// Second string
        second: String,

        /// Skip the semantic score (no API key or network needed)
        #[arg(long)]
        lexical_only: bool,

        /// Print scores as JSON instead of a coloured table
        #[arg(long)]
        json: bool,
    },

    /// Explain each similarity method and the colour bands
    Methods,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("semantik=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            first,
            second,
            lexical_only,
            json,
        } => {
            if first.is_empty() || second.is_empty() {
                println!("Please enter two strings to compare.");
                return Ok(());
            }

            let config = Config::load()?;
            let comparator = if lexical_only {
                Comparator::lexical_only()
            } else {
                Comparator::from_config(&config)
            };

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
            spinner.set_message("Computing similarity measures...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let result = comparator.compare(&first, &second).await;
            spinner.finish_and_clear();
            let scores = result?;

            if json {
                println!("{}", render_json(&scores)?);
            } else {
                terminal::display_report(&first, &second, &scores);
            }
        }

        Commands::Methods => {
            terminal::display_methods();
            terminal::display_legend();
        }
    }

    Ok(())
}
