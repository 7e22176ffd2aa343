// ABOUTME: goalpace CLI - decompose goals locally or through the remote goals API
// ABOUTME: Prints decomposition responses as JSON or a short human-readable summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors
//!
//! Usage:
//! ```bash
//! # Spread 80 remaining units over daily occurrences until a deadline
//! goalpace-cli decompose --target 100 --progress 20 --deadline 2026-11-01 --frequency daily
//!
//! # Same goal with a capacity limit derived from difficulty
//! goalpace-cli decompose --target 100 --progress 20 --deadline 2026-11-01 \
//!     --frequency weekly:mon,thu --difficulty 4 --capacity-model difficulty_scaled
//!
//! # Decompose goal 3 against frequency 1 loaded from the API
//! goalpace-cli remote --goal-id 3 --frequency-id 1 --base-url http://localhost:8080/api
//!
//! # List the occurrences of a pattern
//! goalpace-cli occurrences --frequency monthly:31 --from 2026-01-01 --to 2026-06-30
//! ```

mod commands;
mod helpers;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use goalpace::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "goalpace-cli",
    about = "Goal decomposition and feasibility CLI",
    long_about = "Splits a goal's remaining work into a per-occurrence quantity, checks whether the deadline is realistic, and suggests a later one when it is not."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Short human-readable summary
    Summary,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Decompose a goal described by flags
    Decompose(commands::decompose::DecomposeArgs),

    /// Decompose a goal loaded from the goals API
    Remote(commands::remote::RemoteArgs),

    /// List the occurrences of a frequency pattern in a date range
    Occurrences(commands::occurrences::OccurrencesArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    match cli.command {
        Command::Decompose(args) => commands::decompose::run(&args, cli.format)?,
        Command::Remote(args) => commands::remote::run(args, cli.format).await?,
        Command::Occurrences(args) => commands::occurrences::run(&args, cli.format)?,
    }

    Ok(())
}
