//! Command-line surface of the `bisect` binary.

use std::io::{self, Write};
use std::net::SocketAddr;
use std::process::ExitCode;

use anyhow::Context;
use bisect_search::normalize::normalize_text;
use bisect_search::render::{render_result, render_sequence, LineObserver};
use bisect_search::report::{run_search, run_search_observed};
use clap::{Parser, Subcommand};

use crate::cases::{run_cases, MANUAL_CASES};
use crate::config::AppConfig;
use crate::http::{self, AppState};
use crate::interactive::{run_interactive, DemoOutcome, SORTING_NOTICE};

/// Exit status for rejected input.
pub const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "bisect", about = "Binary search with a visible step trace", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Prompt for numbers and a target, then print every step (default).
    Demo,
    /// Search once without prompting.
    Run {
        #[arg(long, allow_hyphen_values = true)]
        target: String,
        /// Print the canonical JSON report instead of the step lines.
        #[arg(long)]
        json: bool,
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Run the built-in manual cases.
    Cases,
    /// Serve the visualizer and the `/search` endpoint.
    Serve {
        /// Overrides `BISECT_BIND`.
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
}

/// Run the parsed command.
///
/// # Errors
///
/// Returns an error for I/O failures or if the server cannot start.
/// Invalid search input is not an error; it yields exit status 2.
pub fn execute(cli: Cli, config: &AppConfig) -> anyhow::Result<ExitCode> {
    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => demo(config),
        Command::Run {
            target,
            json,
            values,
        } => run(config, &values, &target, json),
        Command::Cases => {
            let summary = run_cases(MANUAL_CASES, io::stdout().lock())?;
            Ok(if summary.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Serve { bind } => {
            let addr = bind.unwrap_or(config.bind);
            let runtime = tokio::runtime::Runtime::new().context("cannot start tokio runtime")?;
            runtime
                .block_on(http::serve(addr, AppState::from_config(config)))
                .with_context(|| format!("server on {addr} failed"))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn demo(config: &AppConfig) -> anyhow::Result<ExitCode> {
    let outcome = run_interactive(
        io::stdin().lock(),
        io::stdout().lock(),
        &config.normalize_policy(),
    )?;
    Ok(match outcome {
        DemoOutcome::Found(_) | DemoOutcome::NotFound => ExitCode::SUCCESS,
        DemoOutcome::InvalidInput(_) => ExitCode::from(EXIT_INVALID_INPUT),
    })
}

fn run(config: &AppConfig, values: &[String], target: &str, json: bool) -> anyhow::Result<ExitCode> {
    let input = match normalize_text(&values.join(" "), target, &config.normalize_policy()) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(error = %e, "run input rejected");
            eprintln!("invalid input: {e}");
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    let mut out = io::stdout().lock();
    if json {
        let report = run_search(&input);
        out.write_all(&report.to_canonical_json_bytes()?)?;
        writeln!(out)?;
        return Ok(ExitCode::SUCCESS);
    }

    if !input.was_sorted {
        writeln!(out, "{SORTING_NOTICE}")?;
    }
    writeln!(
        out,
        "Searching for {} in {}",
        input.target,
        render_sequence(&input.sequence)
    )?;
    let mut observer = LineObserver::new(&input.target, &mut out);
    let report = run_search_observed(&input, &mut observer);
    observer.finish()?;
    writeln!(out, "{}", render_result(&input.target, report.result))?;
    Ok(ExitCode::SUCCESS)
}
