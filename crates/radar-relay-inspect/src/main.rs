/*
[INPUT]:  CLI arguments, optional boundary configuration, JSON-lines payload file
[OUTPUT]: Per-line verdicts and a non-zero exit when any payload is rejected
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or output format
*/

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use radar_relay_inspect::{PayloadKind, inspect_lines};
use radar_relay_types::{Boundary, BoundaryConfig};

#[derive(Parser, Debug)]
#[command(name = "radar-relay-inspect", version, about = "Check captured Radar Relay payloads against the wire contracts")]
struct Cli {
    /// JSON-lines file to inspect, `-` for stdin
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    #[arg(long = "kind", value_enum)]
    kind: PayloadKind,
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Load and validate the configuration, then exit
    #[arg(long = "dry-run")]
    dry_run: bool,
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(
        input = %args.input.display(),
        kind = ?args.kind,
        dry_run = args.dry_run,
        "starting radar-relay-inspect"
    );

    let config = load_config(args.config_path.as_ref())?;
    info!(
        market_count = config.markets.len(),
        topic_count = config.topics.len(),
        "configuration loaded"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(ExitCode::SUCCESS);
    }

    let boundary = Boundary::new(config).context("build boundary")?;
    let reader = open_input(&args.input)?;
    let report = inspect_lines(&boundary, args.kind, reader)?;

    for verdict in &report.verdicts {
        let status = if verdict.is_accepted() { "ok" } else { "REJECTED" };
        println!("{:>6}  {:<8} {}", verdict.line, status, verdict.summary);
    }
    println!(
        "{} accepted, {} rejected",
        report.accepted(),
        report.rejected()
    );

    if report.rejected() > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<BoundaryConfig> {
    BoundaryConfig::load(path.map(PathBuf::as_path)).context("load config")
}

fn open_input(path: &PathBuf) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}
