// ABOUTME: DashMap-backed goal repository for tests, benchmarks, and offline CLI use
// ABOUTME: Concurrent inserts and lookups without external locking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use super::GoalRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{Frequency, FrequencyId, Goal, GoalId};
use async_trait::async_trait;
use dashmap::DashMap;

/// In-memory goal and frequency store
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    goals: DashMap<GoalId, Goal>,
    frequencies: DashMap<FrequencyId, Frequency>,
}

impl InMemoryRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a goal snapshot
    pub fn insert_goal(&self, goal: Goal) {
        self.goals.insert(goal.id, goal);
    }

    /// Insert or replace a frequency
    pub fn insert_frequency(&self, frequency: Frequency) {
        self.frequencies.insert(frequency.id, frequency);
    }

    /// Builder-style goal insert
    #[must_use]
    pub fn with_goal(self, goal: Goal) -> Self {
        self.insert_goal(goal);
        self
    }

    /// Builder-style frequency insert
    #[must_use]
    pub fn with_frequency(self, frequency: Frequency) -> Self {
        self.insert_frequency(frequency);
        self
    }

    /// Number of stored goals
    #[must_use]
    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }
}

#[async_trait]
impl GoalRepository for InMemoryRepository {
    async fn load_goal(&self, id: GoalId) -> AppResult<Goal> {
        self.goals
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Goal {id}")).with_resource_id(id.to_string()))
    }

    async fn load_frequency(&self, id: FrequencyId) -> AppResult<Frequency> {
        self.frequencies
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                AppError::not_found(format!("Frequency {id}")).with_resource_id(id.to_string())
            })
    }
}
