use std::io::{self, Write};

use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use waitline_lib::{Outcome, Script, Step, Waitline, parse_step};

/// Simulate a line of people waiting for tickets.
///
/// Without steps, runs the built-in demonstration.
///
/// Examples:
///   waitline
///   waitline join:Alice join:Bob serve bribe:Frank@1 size
///   waitline --json join:Alice serve:3
#[derive(Debug, Parser)]
#[command(name = "waitline")]
#[command(version)]
#[command(about = "Simulate a line of people waiting for tickets", long_about = None)]
struct Cli {
    /// Print one JSON object per outcome instead of prose.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level logging on stderr.
    #[arg(long)]
    debug: bool,

    /// Steps to run: join:NAME, join+:NAME, serve, serve:N, bribe:NAME@POS, size.
    #[arg(value_name = "STEP", value_parser = parse_step)]
    steps: Vec<Step>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode outcome: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    run(cli)
}

fn init_tracing(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();
}

#[tracing::instrument(skip(cli), fields(json = cli.json))]
fn run(cli: Cli) -> Result<(), CliError> {
    let script = if cli.steps.is_empty() {
        info!("running demonstration");
        Script::demo()
    } else {
        Script::new(cli.steps)
    };

    info!(steps = script.steps().len(), "running script");
    let mut line = Waitline::new();
    let outcomes = script.run(&mut line);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_outcomes(&mut out, &outcomes, cli.json)?;
    out.flush()?;

    Ok(())
}

fn write_outcomes(out: &mut impl Write, outcomes: &[Outcome], json: bool) -> Result<(), CliError> {
    for outcome in outcomes {
        if json {
            let line = serde_json::to_string(outcome)?;
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "{outcome}")?;
        }
    }

    Ok(())
}
