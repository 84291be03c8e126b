use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use connect_four::config::SessionConfig;
use connect_four::game::{Board, GameEngine};
use connect_four::shell::ConsoleShell;

/// Play Connect Four against another person at the same terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Seed the starting-player draw
    #[arg(long)]
    seed: Option<u64>,

    /// Print a configuration file with every default value and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", SessionConfig::default_toml());
        return Ok(());
    }

    let mut config = SessionConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level).context("parsing log_level")?)
        .with_writer(io::stderr)
        .init();
    if cli.config.exists() {
        tracing::info!(path = %cli.config.display(), "loaded config file");
    }
    tracing::debug!(?config, "configuration loaded");

    let mut engine = match config.starting_player {
        Some(first) => GameEngine::with_state(Board::new(), first),
        None => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            GameEngine::new(&mut rng)
        }
    };

    let stdin = io::stdin();
    let mut shell = ConsoleShell::new(stdin.lock(), io::stdout())
        .with_max_attempts(config.max_prompt_attempts);

    engine.run_session(&mut shell).context("running game session")?;
    Ok(())
}
