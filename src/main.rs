//! cube-swipe: command-line front end
//!
//! Reads and writes the JSON wire records so the engine can sit behind any
//! transport. Results go to stdout as a `ServiceResult` envelope; logs go to
//! stderr.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cube_swipe::{CubeService, EngineConfig, GesturePolicy, RotateRequest, ServiceResult, ValidationMode};

#[derive(Debug, Parser)]
#[command(name = "cube-swipe", version, about = "Generate and turn N×N×N cubes from swipe gestures")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON engine configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also verify every cell's axis coordinates
    #[arg(long, global = true)]
    strict: bool,

    /// Return the cube unchanged for swipes that match no axis ring
    #[arg(long, global = true)]
    ignore_unrecognized_gestures: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Logging level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, env = "CUBE_SWIPE_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a solved cube
    Generate {
        /// Cells per edge (3 to 10)
        #[arg(long, short, allow_negative_numbers = true)]
        length: i32,
    },
    /// Apply one swipe to the cube in a rotate request
    Rotate {
        /// Request file; reads stdin when omitted
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let outcome = run(&cli, &mut io::stdout().lock());
    if let Err(err) = &outcome {
        eprintln!("cube-swipe: {:#}", err);
    }
    ExitCode::from(exit_status(&outcome))
}

/// 0 on success, 1 when the cube operation failed, 2 when the request or
/// response could not be handled
fn exit_status(outcome: &Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn engine_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if cli.strict {
        config = config.with_validation(ValidationMode::Strict);
    }
    if cli.ignore_unrecognized_gestures {
        config = config.with_gestures(GesturePolicy::Ignore);
    }
    Ok(config)
}

/// Runs the selected command and writes its envelope to `out`
///
/// Returns whether the cube operation itself succeeded.
fn run(cli: &Cli, out: &mut impl Write) -> Result<bool> {
    let service = CubeService::new(engine_config(cli)?);
    tracing::debug!(config = ?service.config(), "engine configured");

    let result = match &cli.command {
        Command::Generate { length } => service.generate(*length),
        Command::Rotate { input } => {
            let request = read_request(input.as_ref())?;
            service.rotate(request)
        }
    };

    let envelope = ServiceResult::from(result);
    let json = if cli.pretty {
        serde_json::to_string_pretty(&envelope)
    } else {
        serde_json::to_string(&envelope)
    }
    .context("serializing response")?;
    writeln!(out, "{}", json).context("writing response")?;

    Ok(envelope.is_successful)
}

fn read_request(input: Option<&PathBuf>) -> Result<RotateRequest> {
    let raw = match input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("reading stdin")?;
            buffer
        }
    };
    serde_json::from_str(&raw).context("parsing rotate request")
}
