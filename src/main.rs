//! Bowling simulator runner (default binary).
//!
//! Plays one game and prints the frame-by-frame pin diagrams, the scorecard
//! and the final score. Configuration comes from the environment; see
//! [`bowling_sim::config`].

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use bowling_sim::config::{OutputFormat, SimConfig};
use bowling_sim::core::{Game, SimpleRng, ThreadSource, UniformSource};
use bowling_sim::term::{write_report, GameReport};

fn main() -> Result<()> {
    let config = SimConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(SimConfig::DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let mut rng: Box<dyn UniformSource> = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "seeded game");
            Box::new(SimpleRng::new(seed))
        }
        None => Box::new(ThreadSource::new()),
    };

    let mut game = Game::new();
    game.run(rng.as_mut()).context("failed to play game")?;

    let mut stdout = io::stdout().lock();
    match config.output {
        OutputFormat::Text => write_report(&mut stdout, &game, config.color)?,
        OutputFormat::Json => {
            let json = GameReport::from_game(&game)
                .to_json()
                .context("failed to serialize game report")?;
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}
