// ABOUTME: Data layer abstraction for loading goal and frequency snapshots
// ABOUTME: Implemented by the in-memory store and the remote API client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! # Goal Repository
//!
//! The decomposition service loads its inputs through [`GoalRepository`].
//! Lookups that find nothing return `ResourceNotFound`; the service forwards
//! that error unchanged.

use crate::errors::AppResult;
use crate::models::{Frequency, FrequencyId, Goal, GoalId};
use async_trait::async_trait;
use std::sync::Arc;

/// In-memory repository
pub mod memory;

pub use memory::InMemoryRepository;

/// Source of goal and frequency snapshots
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Load a goal by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no goal has this id, or a transport error
    async fn load_goal(&self, id: GoalId) -> AppResult<Goal>;

    /// Load a frequency by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no frequency has this id, or a transport error
    async fn load_frequency(&self, id: FrequencyId) -> AppResult<Frequency>;
}

#[async_trait]
impl<T: GoalRepository + ?Sized> GoalRepository for Arc<T> {
    async fn load_goal(&self, id: GoalId) -> AppResult<Goal> {
        (**self).load_goal(id).await
    }

    async fn load_frequency(&self, id: FrequencyId) -> AppResult<Frequency> {
        (**self).load_frequency(id).await
    }
}
