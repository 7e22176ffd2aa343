// ABOUTME: Decomposition service resolving request ids through a repository before running the engine
// ABOUTME: Mirrors the POST /goals/decompose request and response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use crate::errors::AppResult;
use crate::intelligence::DecompositionEngine;
use crate::models::{DecompositionRequest, DecompositionResponse, DecompositionResult};
use crate::repository::GoalRepository;
use chrono::{DateTime, Utc};
use tracing::info;

/// Loads goal and frequency snapshots and decomposes them
#[derive(Debug, Clone)]
pub struct DecompositionService<R> {
    repository: R,
    engine: DecompositionEngine,
}

impl<R: GoalRepository> DecompositionService<R> {
    /// Create a service over a repository and engine
    #[must_use]
    pub const fn new(repository: R, engine: DecompositionEngine) -> Self {
        Self { repository, engine }
    }

    /// Underlying engine
    #[must_use]
    pub const fn engine(&self) -> &DecompositionEngine {
        &self.engine
    }

    /// Underlying repository
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Decompose using the current wall-clock time
    ///
    /// # Errors
    ///
    /// Forwards `ResourceNotFound` from the repository unchanged, plus the
    /// engine's `InvalidInput` and `Infeasible` errors
    pub async fn decompose(
        &self,
        request: &DecompositionRequest,
    ) -> AppResult<DecompositionResponse> {
        self.decompose_at(request, Utc::now()).await
    }

    /// Decompose as of `now`
    ///
    /// # Errors
    ///
    /// See [`Self::decompose`]
    pub async fn decompose_at(
        &self,
        request: &DecompositionRequest,
        now: DateTime<Utc>,
    ) -> AppResult<DecompositionResponse> {
        self.evaluate_at(request, now).await.map(Into::into)
    }

    /// Decompose as of `now`, returning the typed result with its occurrence count
    ///
    /// # Errors
    ///
    /// See [`Self::decompose`]
    #[tracing::instrument(
        skip(self, request),
        fields(goal_id = %request.goal_id, frequency_id = %request.frequency_id)
    )]
    pub async fn evaluate_at(
        &self,
        request: &DecompositionRequest,
        now: DateTime<Utc>,
    ) -> AppResult<DecompositionResult> {
        let (goal, frequency) = tokio::try_join!(
            self.repository.load_goal(request.goal_id),
            self.repository.load_frequency(request.frequency_id),
        )?;

        let result = self
            .engine
            .decompose_frequency(&goal, &frequency, request.quantity, now)?;

        info!(
            frequency = %frequency.name,
            required_quantity = result.required_quantity,
            feasible = ?result.feasibility.as_flag(),
            "Goal decomposed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::models::{Frequency, FrequencyId, Goal, GoalId};
    use crate::repository::InMemoryRepository;
    use chrono::{Duration, TimeZone};

    #[tokio::test]
    async fn test_unrecognised_frequency_is_invalid_input() {
        let now = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
        let repository = InMemoryRepository::new()
            .with_goal(Goal::new(GoalId(1), 10.0, now + Duration::days(5)))
            .with_frequency(Frequency::new(FrequencyId(2), "fortnightly-ish"));
        let service = DecompositionService::new(repository, DecompositionEngine::default());

        let err = service
            .decompose_at(&DecompositionRequest::new(GoalId(1), FrequencyId(2)), now)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.context.resource_id.as_deref(), Some("2"));
    }
}
