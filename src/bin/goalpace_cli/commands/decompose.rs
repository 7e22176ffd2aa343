// ABOUTME: Local decomposition command for goalpace-cli
// ABOUTME: Builds a goal snapshot from flags and runs the engine without any network access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use crate::helpers::display::print_result;
use crate::OutputFormat;
use chrono::Utc;
use clap::Args;
use goalpace::config::DecompositionConfig;
use goalpace::errors::AppResult;
use goalpace::intelligence::{CapacityModel, DecompositionEngine, Recurrence};
use goalpace::models::{Goal, GoalId, DEFAULT_SCORE};
use goalpace::time::parse_instant;
use tracing::info;

/// Flags describing the goal to decompose
#[derive(Debug, Args)]
pub struct DecomposeArgs {
    /// Target quantity
    #[arg(long)]
    target: f64,

    /// Progress made so far
    #[arg(long, default_value_t = 0.0)]
    progress: f64,

    /// Deadline, RFC 3339 or YYYY-MM-DD
    #[arg(long)]
    deadline: String,

    /// Frequency pattern, e.g. daily, weekly:mon,thu, monthly:15, every:3d
    #[arg(long, default_value = "daily")]
    frequency: String,

    /// Difficulty score, 1-5
    #[arg(long, default_value_t = DEFAULT_SCORE)]
    difficulty: u8,

    /// Importance score, 1-5
    #[arg(long, default_value_t = DEFAULT_SCORE)]
    importance: u8,

    /// Fixed quantity per occurrence instead of the computed one
    #[arg(long)]
    quantity: Option<f64>,

    /// Evaluation time (defaults to now), RFC 3339 or YYYY-MM-DD
    #[arg(long)]
    now: Option<String>,

    /// Capacity model: unbounded, fixed, difficulty_scaled (defaults to GOALPACE_CAPACITY_MODEL)
    #[arg(long)]
    capacity_model: Option<String>,

    /// Base capacity for fixed and difficulty_scaled models
    #[arg(long)]
    base_capacity: Option<f64>,

    /// Importance weight for the difficulty_scaled model
    #[arg(long)]
    importance_weight: Option<f64>,
}

impl DecomposeArgs {
    fn config(&self) -> AppResult<DecompositionConfig> {
        let config = DecompositionConfig::from_env()?;
        let mut model = match &self.capacity_model {
            Some(name) => name.parse::<CapacityModel>()?,
            None => config.capacity_model,
        };
        if let Some(base) = self.base_capacity {
            model = model.with_base(base);
        }
        if let Some(weight) = self.importance_weight {
            model = model.with_importance_weight(weight);
        }
        Ok(config.with_capacity_model(model))
    }

    fn goal(&self) -> AppResult<Goal> {
        Ok(
            Goal::new(GoalId(0), self.target, parse_instant(&self.deadline)?)
                .with_progress(self.progress)
                .with_scores(self.difficulty, self.importance)
                .with_name("command line goal"),
        )
    }
}

/// Run a local decomposition and print the result
pub fn run(args: &DecomposeArgs, format: OutputFormat) -> AppResult<()> {
    let engine = DecompositionEngine::new(args.config()?);
    let goal = args.goal()?;
    let recurrence: Recurrence = args.frequency.parse()?;
    let now = args
        .now
        .as_deref()
        .map_or_else(|| Ok(Utc::now()), parse_instant)?;

    info!(
        capacity_model = %engine.config().capacity_model,
        recurrence = %recurrence,
        "Decomposing goal locally"
    );
    let result = engine.decompose(&goal, &recurrence, args.quantity, now)?;
    print_result(&result, format)
}
