//! `license-gate` — check third-party dependency licenses against permitted lists.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and install logging ([`logging`]).
//! 2. Merge the repository-wide and project configs ([`config::load_policy`]).
//!    Missing or broken configs are logged and contribute nothing.
//! 3. Load the build-tool license report ([`dependencies`]). Failure is fatal.
//! 4. Classify every artifact ([`license::classifier`]).
//! 5. Write the result file and render the console report ([`report`]).
//! 6. Exit `0` (valid), `1` (restricted artifacts found) or `2` (fatal error).

mod cli;
mod config;
mod dependencies;
mod error;
mod license;
mod logging;
mod models;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, ReportFormat};
use config::load_policy;
use dependencies::load_license_report;
use license::classifier::classify;
use models::Verdict;

const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(Verdict::Valid) => ExitCode::SUCCESS,
        Ok(Verdict::Invalid) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(cli: &Cli) -> Result<Verdict> {
    let configs = [cli.config.as_path(), cli.additional_config.as_path()];
    let policy = load_policy(&configs);

    // Nothing is written unless the report could be read.
    let artifacts = load_license_report(&cli.report)?;

    let classification = classify(&policy, &artifacts);
    report::file::write(&classification, &cli.output)?;

    match cli.format {
        ReportFormat::Terminal => {
            report::terminal::render(
                &classification,
                &cli.report,
                &configs,
                cli.verbose,
                cli.quiet,
            );
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&classification)?);
        }
    }

    Ok(classification.verdict)
}
