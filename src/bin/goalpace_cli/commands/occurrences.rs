// ABOUTME: Occurrence listing command for goalpace-cli
// ABOUTME: Enumerates the dates of a frequency pattern in a half-open range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use crate::helpers::display::print_occurrences;
use crate::OutputFormat;
use clap::Args;
use goalpace::errors::AppResult;
use goalpace::intelligence::Recurrence;
use goalpace::time::parse_instant;

/// Pattern and range to enumerate
#[derive(Debug, Args)]
pub struct OccurrencesArgs {
    /// Frequency pattern
    #[arg(long)]
    frequency: String,

    /// Range start, exclusive
    #[arg(long)]
    from: String,

    /// Range end, inclusive
    #[arg(long)]
    to: String,
}

/// List occurrences in `(from, to]`
pub fn run(args: &OccurrencesArgs, format: OutputFormat) -> AppResult<()> {
    let recurrence: Recurrence = args.frequency.parse()?;
    let occurrences =
        recurrence.occurrences_between(parse_instant(&args.from)?, parse_instant(&args.to)?);
    print_occurrences(&occurrences, format)
}
