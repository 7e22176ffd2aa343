// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors
// ABOUTME: Output formatting helpers for goalpace-cli
// ABOUTME: Renders decomposition results and occurrence lists as JSON or text

use crate::OutputFormat;
use chrono::{DateTime, Utc};
use goalpace::errors::AppResult;
use goalpace::models::{DecompositionResponse, DecompositionResult, Feasibility};

/// Print a locally computed result
pub fn print_result(result: &DecompositionResult, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(&DecompositionResponse::from(result)),
        OutputFormat::Summary => {
            println!("Occurrences until deadline: {}", result.occurrences);
            print_summary(
                result.required_quantity,
                &result.feasibility,
                result.suggested_deadline,
            );
            Ok(())
        }
    }
}

/// Print a response received from the server
pub fn print_response(response: &DecompositionResponse, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(response),
        OutputFormat::Summary => {
            let feasibility = match (response.feasible, response.value_shortfall) {
                (Some(true), _) => Feasibility::Feasible,
                (Some(false), shortfall) => Feasibility::Infeasible {
                    value_shortfall: shortfall.unwrap_or_default(),
                },
                (None, _) => Feasibility::Indeterminate,
            };
            print_summary(
                response.required_quantity,
                &feasibility,
                response.suggested_deadline,
            );
            Ok(())
        }
    }
}

/// Print occurrence instants
pub fn print_occurrences(occurrences: &[DateTime<Utc>], format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(occurrences),
        OutputFormat::Summary => {
            for occurrence in occurrences {
                println!("{}", occurrence.format("%Y-%m-%d (%a)"));
            }
            println!("{} occurrence(s)", occurrences.len());
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_summary(
    required_quantity: f64,
    feasibility: &Feasibility,
    suggested_deadline: Option<DateTime<Utc>>,
) {
    println!("Required per occurrence: {required_quantity:.2}");
    match feasibility {
        Feasibility::Feasible => println!("Feasible: yes"),
        Feasibility::Indeterminate => {
            println!("Feasible: unknown (no occurrence left before the deadline)");
        }
        Feasibility::Infeasible { value_shortfall } => {
            println!("Feasible: no");
            println!("Shortfall at current pace: {value_shortfall:.2}");
        }
    }
    if let Some(deadline) = suggested_deadline {
        println!("Suggested deadline: {}", deadline.format("%Y-%m-%d"));
    }
}
