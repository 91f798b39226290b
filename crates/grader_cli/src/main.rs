use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use duel_core::{SimulationParams, SimulationRng, DEFAULT_SEED};
use grader_core::{collect, run_scenario, send_all, Dossier, GradeReport, GraderConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Grade lightsaber duel exercises and print the checklist")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the duel scenario and print one line per check.
    Simulate(SimulateArgs),
    /// Print the personal info gathered from a JSON list of dossiers.
    Collect(CollectArgs),
    /// Pretty-print an existing report.
    Report(ReportArgs),
}

#[derive(Args)]
struct SimulateArgs {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    id: Option<String>,
    /// Print the full JSON report instead of the checklist.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CollectArgs {
    #[arg(long)]
    input: PathBuf,
    /// Also fire each dossier's notification hook.
    #[arg(long)]
    send: bool,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Simulate(args) => handle_simulate(args),
        Commands::Collect(args) => {
            init_tracing(None);
            handle_collect(args)
        }
        Commands::Report(args) => {
            init_tracing(None);
            handle_report(args)
        }
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn handle_simulate(args: SimulateArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => GraderConfig::from_path(path)?,
        None => GraderConfig::default(),
    };

    let telemetry = config.telemetry.clone().unwrap_or_default();
    if telemetry.trace_enabled() {
        init_tracing(telemetry.trace_filter.as_deref());
    }

    let seed = pick_seed(args.seed, SimulationParams::seed_from_env(), config.seed);
    let mut rng = SimulationRng::new(seed);
    let mut roster = config.build_roster(&mut rng)?;

    let run_id = args
        .id
        .unwrap_or_else(|| format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S")));
    let checks = run_scenario(&mut roster, &config.scenario_options());
    let report = GradeReport::new(run_id, seed, checks);
    info!(target: "grader_cli", id = %report.id, seed, "scenario finished");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }

    if let Some(report_cfg) = config.report.as_ref() {
        if let Some(parent) = report_cfg.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&report_cfg.path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("failed to write {}", report_cfg.path.display()))?;
        println!("Report written to {}", report_cfg.path.display());
    }

    if !report.passed() {
        anyhow::bail!(
            "{} of {} checks failed",
            report.summary.failed,
            report.checks.len()
        );
    }
    Ok(())
}

/// `--seed` beats `GRADER_SEED`, which beats the config file.
fn pick_seed(flag: Option<u64>, env: Option<u64>, config: Option<u64>) -> u64 {
    flag.or(env).or(config).unwrap_or(DEFAULT_SEED)
}

fn handle_collect(args: CollectArgs) -> Result<()> {
    let data = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let dossiers: Vec<Dossier> = serde_json::from_str(&data)
        .with_context(|| format!("{} is not a JSON list of dossiers", args.input.display()))?;
    for line in collect(&dossiers) {
        println!("{line}");
    }
    if args.send {
        let sent = send_all(&dossiers);
        info!(target: "grader_cli", sent, "dossiers forwarded");
    }
    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<()> {
    let data = fs::read_to_string(&args.input)?;
    let report: GradeReport = serde_json::from_str(&data)?;
    println!(
        "Report {} -> {:?} ({}/{} passed, {:.2})",
        report.id,
        report.summary.status,
        report.summary.passed,
        report.checks.len(),
        report.summary.score
    );
    for line in report.lines() {
        println!("  {line}");
    }
    Ok(())
}
