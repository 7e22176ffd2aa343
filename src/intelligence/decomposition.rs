// ABOUTME: Goal decomposition engine computing per-occurrence quantity and feasibility
// ABOUTME: Suggests a later workable deadline when the current one cannot be met
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! # Decomposition Engine
//!
//! Spreads the remaining work of a goal over the occurrences of a recurrence
//! between `now` and the goal's deadline, then checks the resulting pace
//! against the capacity derived from the goal's difficulty and importance.
//!
//! The engine is pure: it never reads the clock, performs no I/O and holds no
//! mutable state, so one instance can be shared freely across threads.

use super::capacity::{at_most, Capacity};
use super::recurrence::Recurrence;
use crate::config::DecompositionConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{DecompositionResult, Feasibility, Frequency, Goal};
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tracing::{debug, warn};

/// Validated numeric inputs of one decomposition
#[derive(Debug, Clone, Copy)]
struct Workload {
    remaining: f64,
    occurrences: u32,
    capacity: Capacity,
    quantity_override: Option<f64>,
}

/// Decomposition engine
#[derive(Debug, Clone, Default)]
pub struct DecompositionEngine {
    config: DecompositionConfig,
}

impl DecompositionEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: DecompositionConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &DecompositionConfig {
        &self.config
    }

    /// Decompose a goal over a frequency label
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the frequency name is not a recognised
    /// pattern, plus every error of [`Self::decompose`]
    pub fn decompose_frequency(
        &self,
        goal: &Goal,
        frequency: &Frequency,
        quantity_override: Option<f64>,
        now: DateTime<Utc>,
    ) -> AppResult<DecompositionResult> {
        let recurrence: Recurrence = frequency
            .name
            .parse()
            .map_err(|e: AppError| e.with_resource_id(frequency.id.to_string()))?;
        self.decompose(goal, &recurrence, quantity_override, now)
    }

    /// Decompose a goal into a per-occurrence quantity.
    ///
    /// `now` is supplied by the caller; the engine never reads the clock.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a negative or non-finite target, progress or
    ///   override, or scores outside 1-5
    /// - `Infeasible` when a deadline search is required but the capacity
    ///   is zero
    #[tracing::instrument(
        skip(self, goal, recurrence),
        fields(goal_id = %goal.id, recurrence = %recurrence)
    )]
    pub fn decompose(
        &self,
        goal: &Goal,
        recurrence: &Recurrence,
        quantity_override: Option<f64>,
        now: DateTime<Utc>,
    ) -> AppResult<DecompositionResult> {
        validate_goal(goal)?;
        if let Some(quantity) = quantity_override {
            ensure_non_negative("quantity", quantity)?;
        }

        let workload = Workload {
            remaining: (goal.target_quantity - goal.current_progress).max(0.0),
            occurrences: recurrence.count_occurrences(now, goal.deadline),
            capacity: self
                .config
                .capacity_model
                .capacity(goal.difficulty, goal.importance)?,
            quantity_override,
        };

        let result = if workload.remaining <= 0.0 {
            DecompositionResult {
                required_quantity: 0.0,
                feasibility: Feasibility::Feasible,
                suggested_deadline: None,
                occurrences: workload.occurrences,
            }
        } else if workload.occurrences == 0 {
            self.without_occurrences(goal, recurrence, &workload, now)?
        } else {
            self.with_occurrences(goal, recurrence, &workload, now)?
        };

        debug!(
            remaining = workload.remaining,
            occurrences = result.occurrences,
            required_quantity = result.required_quantity,
            feasible = ?result.feasibility.as_flag(),
            suggested_deadline = ?result.suggested_deadline,
            "Decomposed goal"
        );
        Ok(result)
    }

    /// No occurrence left before the deadline: the work cannot be spread, so
    /// feasibility is unknown
    fn without_occurrences(
        &self,
        goal: &Goal,
        recurrence: &Recurrence,
        workload: &Workload,
        now: DateTime<Utc>,
    ) -> AppResult<DecompositionResult> {
        let suggested_deadline = match (workload.quantity_override, workload.capacity.limit()) {
            (None, Some(pace)) => {
                self.search_deadline(goal, recurrence, workload.remaining, pace, now)?
            }
            _ => None,
        };

        Ok(DecompositionResult {
            required_quantity: workload.remaining,
            feasibility: Feasibility::Indeterminate,
            suggested_deadline,
            occurrences: 0,
        })
    }

    fn with_occurrences(
        &self,
        goal: &Goal,
        recurrence: &Recurrence,
        workload: &Workload,
        now: DateTime<Utc>,
    ) -> AppResult<DecompositionResult> {
        let occurrences = f64::from(workload.occurrences);
        let required_quantity = workload
            .quantity_override
            .unwrap_or(workload.remaining / occurrences);

        if workload.capacity.admits(required_quantity) {
            return Ok(DecompositionResult {
                required_quantity,
                feasibility: Feasibility::Feasible,
                suggested_deadline: None,
                occurrences: workload.occurrences,
            });
        }

        // Only a finite capacity can reject a pace
        let (value_shortfall, suggested_deadline) = match workload.capacity.limit() {
            Some(pace) => (
                (-pace).mul_add(occurrences, workload.remaining).max(0.0),
                self.search_deadline(goal, recurrence, workload.remaining, pace, now)?,
            ),
            None => (0.0, None),
        };

        Ok(DecompositionResult {
            required_quantity,
            feasibility: Feasibility::Infeasible { value_shortfall },
            suggested_deadline,
            occurrences: workload.occurrences,
        })
    }

    /// Earliest occurrence after the deadline by which `pace` (the capacity)
    /// per occurrence accumulates `remaining`, or `None` when the search bounds are reached
    fn search_deadline(
        &self,
        goal: &Goal,
        recurrence: &Recurrence,
        remaining: f64,
        pace: f64,
        now: DateTime<Utc>,
    ) -> AppResult<Option<DateTime<Utc>>> {
        if pace <= 0.0 || !pace.is_finite() {
            return Err(AppError::infeasible(format!(
                "no deadline can be met at a pace of {pace} per occurrence with {remaining} remaining"
            ))
            .with_resource_id(goal.id.to_string())
            .with_details(json!({ "remaining": remaining, "pace": pace })));
        }

        let start = goal.deadline.max(now);
        let horizon = Duration::try_days(self.config.max_search_horizon_days)
            .and_then(|span| now.checked_add_signed(span))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut accrued = recurrence.count_occurrences(now, start);
        let mut walked: u32 = 0;
        for candidate in recurrence.occurrences_after(start) {
            if candidate > horizon || walked >= self.config.max_search_occurrences {
                break;
            }
            walked += 1;
            accrued = accrued.saturating_add(1);
            if at_most(remaining, f64::from(accrued) * pace) {
                return Ok((candidate > goal.deadline).then_some(candidate));
            }
        }

        warn!(
            goal_id = %goal.id,
            recurrence = %recurrence,
            remaining,
            pace,
            walked,
            horizon_days = self.config.max_search_horizon_days,
            "Deadline search reached its bound without a workable deadline"
        );
        Ok(None)
    }
}

fn validate_goal(goal: &Goal) -> AppResult<()> {
    ensure_non_negative("targetQuantity", goal.target_quantity)
        .and_then(|()| ensure_non_negative("currentProgress", goal.current_progress))
        .map_err(|e| e.with_resource_id(goal.id.to_string()))
}

fn ensure_non_negative(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(AppError::invalid_input(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}
