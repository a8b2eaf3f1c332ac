//! Parlor Games - console entry point.

use anyhow::Result;
use clap::Parser;
use parlor_games::{Cli, Command, Console, ParlorConfig, PlayError, memory, tictactoe};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;
    let mut rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };
    let mut console = Console::stdio();

    let outcome = match cli.command {
        Command::Tictactoe { .. } => {
            tictactoe::play(&mut console, config.tictactoe(), &mut rng).map_err(PlayError::from)
        }
        Command::Memory { .. } => memory::play(&mut console, config.memory(), &mut rng),
    };

    match outcome {
        Err(err) if err.is_closed() => {
            info!("Console closed, exiting");
            Ok(())
        }
        other => Ok(other?),
    }
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<ParlorConfig> {
    let config = cli.apply(ParlorConfig::load(&cli.config)?);
    config.validate()?;
    info!(?config, "Configuration ready");
    Ok(config)
}

/// Logs go to stderr at `warn` unless `RUST_LOG` says otherwise.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
