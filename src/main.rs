//! `signal-sim` — run a signal controller headless and print its lamps.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use signal_controller::config::parse_seconds_or;
use signal_controller::driver::{self, DEFAULT_CADENCE};
use signal_controller::{Controller, Phase, Sequence, SignalConfig};
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

/// Simulate a traffic signal controller on the terminal.
#[derive(Parser, Debug)]
#[command(name = "signal-sim", author, version, about)]
struct Cli {
    /// Red duration in seconds (1-60; unparseable input uses the default).
    #[arg(long, env = "SIGNAL_RED")]
    red: Option<String>,

    /// Green duration in seconds (1-60; unparseable input uses the default).
    #[arg(long, env = "SIGNAL_GREEN")]
    green: Option<String>,

    /// Amber duration in seconds, also used for red+amber (1-60).
    #[arg(long, env = "SIGNAL_AMBER")]
    amber: Option<String>,

    /// Use the three-phase sequence (no red+amber).
    #[arg(long)]
    simple: bool,

    /// JSON configuration file; flags override its fields.
    #[arg(short, long, env = "SIGNAL_CONFIG")]
    config: Option<PathBuf>,

    /// Heartbeat interval, e.g. "250ms".
    #[arg(long, value_parser = humantime::parse_duration)]
    cadence: Option<Duration>,

    /// Stop after this long, e.g. "30s". Runs until Ctrl-C otherwise.
    #[arg(long, value_parser = humantime::parse_duration)]
    run_for: Option<Duration>,

    /// Log output format.
    #[arg(long, value_enum, default_value = "text", env = "SIGNAL_LOG_FORMAT")]
    log_format: LogFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_logging(format: LogFormat, verbosity: u8) {
    let directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    match format {
        LogFormat::Text => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}

/// File (or defaults) first, then each flag on top.
fn resolve_config(cli: &Cli) -> Result<SignalConfig, Vec<String>> {
    let base = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| vec![format!("{}: {e}", path.display())])?;
            match SignalConfig::from_json(&text) {
                Validation::Success(config) => config,
                Validation::Failure(errors) => {
                    return Err(errors.iter().map(ToString::to_string).collect());
                }
            }
        }
        None => SignalConfig::default(),
    };

    let field = |text: &Option<String>, current: i64| {
        text.as_deref()
            .map_or(current, |t| parse_seconds_or(t, current))
    };
    let sequence = if cli.simple {
        Sequence::Simple
    } else {
        base.sequence
    };

    Ok(SignalConfig::new(
        field(&cli.red, base.red_seconds),
        field(&cli.green, base.green_seconds),
        field(&cli.amber, base.amber_seconds),
        sequence,
    ))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.verbose);

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(errors) => {
            for error in errors {
                eprintln!("error: {error}");
            }
            return ExitCode::from(2);
        }
    };
    tracing::info!(?config, "configuration resolved");

    let mut controller = Controller::new();
    controller.start(&config);

    let mut shown: Option<(Phase, u64)> = None;
    let observe = |snapshot: &signal_controller::ControllerSnapshot| {
        let key = (snapshot.phase, snapshot.remaining_seconds);
        if shown != Some(key) {
            println!("{snapshot}");
            shown = Some(key);
        }
    };

    let run_for = cli.run_for;
    let shutdown = async move {
        match run_for {
            Some(limit) => tokio::time::sleep(limit).await,
            None => {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!("failed to listen for Ctrl-C: {e}");
                    std::future::pending::<()>().await;
                }
            }
        }
    };

    let cadence = cli.cadence.unwrap_or(DEFAULT_CADENCE);
    match driver::run(&mut controller, cadence, || config, observe, shutdown).await {
        Ok(summary) => {
            tracing::info!(
                ticks = summary.ticks,
                transitions = summary.transitions,
                "simulation finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
