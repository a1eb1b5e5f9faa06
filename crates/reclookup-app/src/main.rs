use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use reclookup_core::{RunSummary, TracingReporter};

pub mod cli;
pub mod logging;


use self::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    match run(&cli) {
        Ok(summary) => {
            tracing::info!(
                entries = summary.dictionary_entries,
                lines = summary.stats.lines,
                matched = summary.stats.matched,
                unmatched = summary.stats.unmatched,
                "Run complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let config = cli
        .resolve_config()
        .context("failed to resolve configuration")?;
    tracing::debug!(?config, "Resolved configuration");

    let summary = reclookup_core::run(&config, &TracingReporter)?;
    Ok(summary)
}
