//! CLI entry point: realizes a degree sequence and prints the analyses of the resulting graph.
//!
//! Logging is initialized first so the pipeline can emit diagnostics via `tracing`; failures are
//! logged and mapped to a non-zero exit code.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

mod cli;
mod logging;

use cli::{Cli, render_report, run};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let report = run(&cli).context("failed to analyze degree sequence")?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_report(&report, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        error!(error = %err, "command execution failed");
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
