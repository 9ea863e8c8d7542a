//! Gridmark - unified CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use gridmark::{Cli, Command, GameConfig, GameSummary, PlayOutcome};
use gridmark_rules::SizePolicy;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Input ended before the game reached a terminal state.
const EXIT_ABANDONED: u8 = 1;
/// The game could not be configured.
const EXIT_CONFIG: u8 = 2;

fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Play {
            config,
            size,
            any_size,
            json,
        } => run_play(config, size, any_size, json),
        Command::Scan { path, top } => run_scan(path, top),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Play one game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(
    config_path: PathBuf,
    size: Option<usize>,
    any_size: bool,
    json: bool,
) -> Result<ExitCode> {
    let mut config = match GameConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Unable to load configuration");
            eprintln!("{}", e);
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };
    if let Some(size) = size {
        info!(size, "Overriding board size");
        config = config.with_board_size(size);
    }
    if any_size {
        config = config.with_size_policy(SizePolicy::AnySize);
    }

    let mut session = match config.build_session() {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, "Unable to start session");
            eprintln!("{}", e);
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let outcome = gridmark::run_game(&mut session, stdin.lock(), &mut stdout)?;

    if json {
        let summary = GameSummary::from_session(&session);
        writeln!(stdout, "{}", serde_json::to_string_pretty(&summary)?)?;
    }

    match outcome {
        PlayOutcome::Finished(state) => {
            info!(%state, "Game finished");
            Ok(ExitCode::SUCCESS)
        }
        PlayOutcome::Abandoned => Ok(ExitCode::from(EXIT_ABANDONED)),
    }
}

/// Tally error lines in a log file
#[instrument(skip_all, fields(path = %path.display()))]
fn run_scan(path: PathBuf, top: Option<usize>) -> Result<ExitCode> {
    let tally = gridmark_logs::scan_file(&path)?;
    let mut stdout = std::io::stdout().lock();
    gridmark::write_tally(&tally, top, &mut stdout)?;
    Ok(ExitCode::SUCCESS)
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,gridmark=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
