// ABOUTME: Decomposition engine configuration: capacity model and deadline search bounds
// ABOUTME: Loaded from GOALPACE_* environment variables with defaults from constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use super::env_or;
use crate::constants::{decomposition, env_vars};
use crate::errors::{AppError, AppResult};
use crate::intelligence::CapacityModel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use tracing::warn;

/// Decomposition engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecompositionConfig {
    /// Difficulty/importance to capacity mapping
    pub capacity_model: CapacityModel,
    /// Maximum occurrences walked while searching for a workable deadline
    pub max_search_occurrences: u32,
    /// Furthest a suggested deadline may lie beyond `now`, in days
    pub max_search_horizon_days: i64,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            capacity_model: CapacityModel::default(),
            max_search_occurrences: decomposition::DEFAULT_MAX_SEARCH_OCCURRENCES,
            max_search_horizon_days: decomposition::DEFAULT_MAX_SEARCH_HORIZON_DAYS,
        }
    }
}

impl DecompositionConfig {
    /// Load decomposition configuration from environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when `GOALPACE_CAPACITY_MODEL` names an unknown model
    pub fn from_env() -> AppResult<Self> {
        let mut capacity_model = match env::var(env_vars::CAPACITY_MODEL) {
            Ok(name) => name.parse::<CapacityModel>().map_err(|e| {
                AppError::config(format!("{}: {}", env_vars::CAPACITY_MODEL, e.message))
            })?,
            Err(_) => CapacityModel::default(),
        };
        if env::var(env_vars::BASE_CAPACITY).is_ok() {
            capacity_model = capacity_model.with_base(env_or(
                env_vars::BASE_CAPACITY,
                decomposition::DEFAULT_BASE_CAPACITY,
            ));
        }
        if env::var(env_vars::IMPORTANCE_WEIGHT).is_ok() {
            capacity_model = capacity_model.with_importance_weight(env_or(
                env_vars::IMPORTANCE_WEIGHT,
                decomposition::DEFAULT_IMPORTANCE_WEIGHT,
            ));
        }

        Ok(Self {
            capacity_model,
            max_search_occurrences: positive_or_default(
                env_vars::MAX_SEARCH_OCCURRENCES,
                env_or(
                    env_vars::MAX_SEARCH_OCCURRENCES,
                    decomposition::DEFAULT_MAX_SEARCH_OCCURRENCES,
                ),
                decomposition::DEFAULT_MAX_SEARCH_OCCURRENCES,
            ),
            max_search_horizon_days: positive_or_default(
                env_vars::MAX_SEARCH_HORIZON_DAYS,
                env_or(
                    env_vars::MAX_SEARCH_HORIZON_DAYS,
                    decomposition::DEFAULT_MAX_SEARCH_HORIZON_DAYS,
                ),
                decomposition::DEFAULT_MAX_SEARCH_HORIZON_DAYS,
            ),
        })
    }

    /// Replace the capacity model
    #[must_use]
    pub const fn with_capacity_model(mut self, capacity_model: CapacityModel) -> Self {
        self.capacity_model = capacity_model;
        self
    }

    /// Replace the search bounds
    #[must_use]
    pub const fn with_search_limits(mut self, max_occurrences: u32, horizon_days: i64) -> Self {
        self.max_search_occurrences = max_occurrences;
        self.max_search_horizon_days = horizon_days;
        self
    }
}

fn positive_or_default<T>(key: &str, value: T, default: T) -> T
where
    T: PartialOrd + Default + Copy + Display,
{
    if value > T::default() {
        value
    } else {
        warn!(key, %value, %default, "Search bound must be positive, using default");
        default
    }
}
