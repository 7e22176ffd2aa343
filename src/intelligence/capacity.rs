// ABOUTME: Per-occurrence capacity models mapping goal difficulty and importance to a pace limit
// ABOUTME: Enum dispatch selected by configuration; unbounded unless a finite model is chosen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use crate::constants::{
    decomposition::{DEFAULT_BASE_CAPACITY, DEFAULT_IMPORTANCE_WEIGHT},
    scores::{MAX_SCORE, MID_SCORE, MIN_SCORE},
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on the quantity a user can sustain per occurrence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Capacity {
    /// No limit: any finite pace is achievable
    Unbounded,
    /// At most this much work per occurrence
    PerOccurrence(f64),
}

impl Capacity {
    /// Finite limit, `None` when unbounded
    #[must_use]
    pub const fn limit(&self) -> Option<f64> {
        match self {
            Self::Unbounded => None,
            Self::PerOccurrence(limit) => Some(*limit),
        }
    }

    /// Whether `quantity` per occurrence fits; equality fits
    #[must_use]
    pub fn admits(&self, quantity: f64) -> bool {
        match self {
            Self::Unbounded => quantity.is_finite(),
            Self::PerOccurrence(limit) => at_most(quantity, *limit),
        }
    }
}

/// `lhs <= rhs`, tolerating floating-point noise relative to the magnitudes involved
#[must_use]
pub fn at_most(lhs: f64, rhs: f64) -> bool {
    const RELATIVE_EPSILON: f64 = 1e-9;
    lhs <= rhs || (lhs - rhs) <= RELATIVE_EPSILON * lhs.abs().max(rhs.abs()).max(1.0)
}

/// Mapping from a goal's difficulty/importance scores to a per-occurrence capacity.
///
/// The true server-side formula is not known, so the mapping is policy chosen
/// by configuration rather than a fixed law:
///
/// - `Unbounded`: every pace is feasible (default)
/// - `Fixed`: the same limit for every goal
/// - `DifficultyScaled`: `base x (6 - difficulty) / 5 x (1 + weight x (importance - 3))`
///
/// `DifficultyScaled` is strictly decreasing in difficulty and, for a
/// non-negative weight, non-decreasing in importance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum CapacityModel {
    /// No capacity limit
    #[default]
    Unbounded,
    /// Constant capacity regardless of scores
    Fixed {
        /// Work per occurrence
        per_occurrence: f64,
    },
    /// Capacity shrinking with difficulty and growing with importance
    DifficultyScaled {
        /// Capacity at difficulty 1 and neutral importance
        base: f64,
        /// Relative bonus per importance step above the midpoint
        importance_weight: f64,
    },
}

impl CapacityModel {
    /// Difficulty-scaled model with default parameters
    #[must_use]
    pub const fn difficulty_scaled() -> Self {
        Self::DifficultyScaled {
            base: DEFAULT_BASE_CAPACITY,
            importance_weight: DEFAULT_IMPORTANCE_WEIGHT,
        }
    }

    /// Compute the capacity for the given scores
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a score is outside 1-5 or a model parameter is
    /// not finite
    pub fn capacity(&self, difficulty: u8, importance: u8) -> AppResult<Capacity> {
        validate_score("difficulty", difficulty)?;
        validate_score("importance", importance)?;

        match *self {
            Self::Unbounded => Ok(Capacity::Unbounded),
            Self::Fixed { per_occurrence } => {
                ensure_finite("per_occurrence", per_occurrence)?;
                Ok(Capacity::PerOccurrence(per_occurrence))
            }
            Self::DifficultyScaled {
                base,
                importance_weight,
            } => {
                ensure_finite("base", base)?;
                ensure_finite("importance_weight", importance_weight)?;

                let ease = f64::from(MAX_SCORE + 1 - difficulty) / f64::from(MAX_SCORE);
                let bias = importance_weight
                    .mul_add(f64::from(importance) - f64::from(MID_SCORE), 1.0)
                    .max(0.0);
                Ok(Capacity::PerOccurrence((base * ease * bias).max(0.0)))
            }
        }
    }

    /// Model name for logging and configuration
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unbounded => "unbounded",
            Self::Fixed { .. } => "fixed",
            Self::DifficultyScaled { .. } => "difficulty_scaled",
        }
    }

    /// Apply a base capacity to models that use one
    #[must_use]
    pub const fn with_base(self, new_base: f64) -> Self {
        match self {
            Self::Unbounded => Self::Unbounded,
            Self::Fixed { .. } => Self::Fixed {
                per_occurrence: new_base,
            },
            Self::DifficultyScaled {
                importance_weight, ..
            } => Self::DifficultyScaled {
                base: new_base,
                importance_weight,
            },
        }
    }

    /// Apply an importance weight to models that use one
    #[must_use]
    pub const fn with_importance_weight(self, weight: f64) -> Self {
        match self {
            Self::DifficultyScaled { base, .. } => Self::DifficultyScaled {
                base,
                importance_weight: weight,
            },
            other => other,
        }
    }
}

impl fmt::Display for CapacityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CapacityModel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unbounded" | "none" => Ok(Self::Unbounded),
            "fixed" => Ok(Self::Fixed {
                per_occurrence: DEFAULT_BASE_CAPACITY,
            }),
            "difficulty_scaled" | "difficulty" => Ok(Self::difficulty_scaled()),
            other => Err(AppError::invalid_input(format!(
                "Unknown capacity model: '{other}'. Valid options: unbounded, fixed, difficulty_scaled"
            ))),
        }
    }
}

/// Reject scores outside 1-5
///
/// # Errors
///
/// Returns `InvalidInput` naming the offending field
pub fn validate_score(field: &str, score: u8) -> AppResult<()> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
        )))
    }
}

fn ensure_finite(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "capacity parameter {field} must be finite"
        )))
    }
}
