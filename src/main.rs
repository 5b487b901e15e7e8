mod config;
mod dictionary;
mod error;
mod game;
mod output;

use anyhow::{Context, Result};
use config::Config;
use dictionary::WordIndex;
use game::{Grid, SolveStats, Solver};
use output::SolutionWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_args(std::env::args().skip(1))?;

    // Diagnostics go to stderr; the output file only ever holds words
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stats = run(&config).await?;
    tracing::info!(
        "Solution with {} words written to {:?}",
        stats.words_found,
        config.output_path
    );

    Ok(())
}

/// Load everything, solve, write. Both inputs are read before the output is
/// touched, and the output is opened before the search starts.
async fn run(config: &Config) -> Result<SolveStats> {
    tracing::info!("Generating dictionary from {:?}", config.dictionary_path);
    let index = WordIndex::load(&config.dictionary_path)
        .await
        .context("Failed to generate dictionary")?;

    tracing::info!("Loading board from {:?}", config.grid_path);
    let grid = Grid::load(&config.grid_path)
        .await
        .context("Failed to load board")?;

    let writer = SolutionWriter::create(&config.output_path).await?;

    tracing::info!("Solving board");
    let mut solver = Solver::new();
    solver.solve(&grid, &index);
    writer.write(&solver.sorted_words()).await?;

    Ok(solver.stats())
}
