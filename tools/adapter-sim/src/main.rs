//! adapter-sim: scenario replay for the fee adapter.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use adapter_telemetry::{gather_metrics, init_telemetry, PrometheusRecorder, TelemetryConfig};
use anyhow::Context;
use clap::Parser;
use tracing::error;

use adapter_sim::{render_text, Scenario, Simulation};

/// Replay a fee adapter scenario against in-memory ledgers
#[derive(Parser, Debug)]
#[command(name = "adapter-sim")]
#[command(about = "Replay deposit/yield/fee scenarios against an in-memory fee adapter")]
struct Args {
    /// Scenario file (JSON)
    scenario: PathBuf,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Stop at the first step whose outcome differs from its expectation and
    /// exit non-zero
    #[arg(long)]
    strict: bool,

    /// Write the final adapter snapshot (bincode) to this path
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Print Prometheus metrics after the run
    #[arg(long)]
    metrics: bool,

    /// Log level filter, overriding ADAPTER_LOG_LEVEL / RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn telemetry_config(args: &Args) -> TelemetryConfig {
    let config = TelemetryConfig::from_env();
    match &args.log_level {
        Some(level) => config.with_log_level(level),
        None => config,
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let _guard = init_telemetry(telemetry_config(args))?;

    let scenario = Scenario::load(&args.scenario)?;
    let mut simulation = Simulation::new(&scenario, Arc::new(PrometheusRecorder::new()))
        .context("building adapter")?;
    let report = simulation.run(&scenario, args.strict);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    if let Some(path) = &args.snapshot {
        let bytes = simulation.snapshot_bytes()?;
        std::fs::write(path, bytes)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
    }

    if args.metrics {
        print!("{}", gather_metrics()?);
    }

    Ok(!args.strict || report.mismatches == 0)
}
