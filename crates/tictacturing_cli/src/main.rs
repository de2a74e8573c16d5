//! Tic-Tac-Turing - command-line front end.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tictacturing::GameState;
use tictacturing_cli::{Cli, CliConfig, Command, Hotseat, SessionEnd};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config = config.with_format(format);
    }

    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!(
        max_attempts = *config.max_attempts(),
        format = ?config.format(),
        log_filter = %config.log_filter(),
        "Config loaded"
    );

    run(cli.command, &config)
}

#[instrument(skip(config))]
fn run(command: Command, config: &CliConfig) -> Result<()> {
    let format = *config.format();
    let output = match command {
        Command::Show { history } => tictacturing_cli::show(&history, format)?,
        Command::Moves { history } => tictacturing_cli::moves(&history, format)?,
        Command::Play { history, grid } => tictacturing_cli::play(&history, &grid, format)?,
        Command::Convert { token } => tictacturing_cli::convert(&token, format)?,
        Command::Hotseat { history } => return run_hotseat(&history, config),
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run_hotseat(history: &str, config: &CliConfig) -> Result<()> {
    let game = GameState::parse(history).context("Cannot resume from history")?;
    let session = Hotseat::new(io::stdin().lock(), io::stdout().lock(), *config.max_attempts());

    match session.run(game)? {
        SessionEnd::TurnAborted(game) => {
            anyhow::bail!(
                "Turn aborted after {} invalid moves (history {:?})",
                config.max_attempts(),
                game.serialize()
            )
        }
        end => {
            debug!(history = %end.game(), "Session ended");
            Ok(())
        }
    }
}
