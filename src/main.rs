mod aggregate;
mod classify;
mod error;
mod extract;
mod fetch;
mod model;
mod pipeline;
mod settings;
mod sources;
mod writer;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use tracing::{error, info};

use fetch::HttpFetcher;
use model::Source;
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "problemset_sync",
    about = "Fetch CodeChef, Codeforces and LeetCode problem lists into normalized JSON"
)]
struct Cli {
    /// Sources to sync (default: all)
    #[arg(value_enum)]
    sources: Vec<Source>,
    /// Output directory (overrides PROBLEMSET_OUTPUT_DIR)
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Per-request timeout in seconds (overrides PROBLEMSET_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load().context("Failed to load settings")?;
    if let Some(dir) = cli.output_dir {
        settings.output_dir = dir;
    }
    if let Some(secs) = cli.timeout {
        settings.timeout_secs = secs;
    }
    info!(settings = ?settings, "Starting problem sync");

    let selected: Vec<Source> = if cli.sources.is_empty() {
        Source::ALL.to_vec()
    } else {
        cli.sources.into_iter().unique().collect()
    };

    let mut failed = Vec::new();
    for source in &selected {
        let strategy = sources::strategy_for(*source);
        let fetcher = HttpFetcher::new(settings.timeout(), strategy.user_agent())
            .context("Failed to build HTTP client")?;

        match pipeline::run(strategy.as_ref(), &fetcher, &settings.output_dir) {
            Ok(report) => report.print(),
            Err(e) => {
                error!(source = %source, error = %e, "Source run failed");
                println!("{source}: failed: {e}");
                failed.push(*source);
            }
        }
    }

    println!("\nDone in {:.1}s", t0.elapsed().as_secs_f64());

    if !failed.is_empty() {
        anyhow::bail!("{} source(s) failed: {}", failed.len(), failed.iter().join(", "));
    }
    Ok(())
}
