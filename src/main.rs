use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use lintsweep::error::ScanError;
use lintsweep::{config, pipeline, report};

const USAGE: &str = "Usage: lintsweep [--json] [--config <FILE>] <project_path>";

/// Run pylint, flake8, black, isort, eslint and prettier over a project and
/// print one combined report.
#[derive(Parser, Debug)]
#[command(name = "lintsweep", version, about)]
struct Cli {
    /// Project directory to scan.
    project_path: PathBuf,

    /// Print the report as JSON (no progress lines).
    #[arg(long)]
    json: bool,

    /// Config file to use instead of `<project_path>/.lintsweep.yaml`.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            tracing::debug!(error = %err, "argument parsing failed");
            println!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let root = &cli.project_path;
    if !root.exists() {
        return Err(ScanError::PathNotFound(root.clone()).into());
    }

    let cfg = match &cli.config {
        Some(path) => config::load_file(path)?,
        None => config::load(root)?,
    };

    let show_progress = !cli.json;
    let report = pipeline::analyze(root, &cfg, |event| {
        if show_progress && let Some(line) = report::progress_line(&event) {
            println!("{line}");
        }
    })?;

    if cli.json {
        println!("{}", report::render_json(&report)?);
    } else {
        print!("{}", report::render_text(&report));
    }
    Ok(())
}
