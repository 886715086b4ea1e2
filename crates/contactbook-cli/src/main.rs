mod commands;
mod error;
mod repl;
mod util;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::Context;
use crate::error::{exit_code_for, invalid_input, report_error};
use crate::util::parse_today;
use contactbook_config as config;

#[derive(Debug, Parser)]
#[command(name = "contactbook", version, about = "contactbook assistant bot")]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    /// Pin the date used for upcoming birthdays (DD.MM.YYYY)
    #[arg(long, value_name = "DATE")]
    today: Option<String>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        today,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let today = today
        .as_deref()
        .map(parse_today)
        .transpose()
        .map_err(|err| invalid_input(format!("--today: {err}")))?;

    let ctx = Context {
        today,
        json,
        config: &app_config,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&ctx, stdin.lock(), stdout.lock()).with_context(|| "interactive session")
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .try_init();
}
