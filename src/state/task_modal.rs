// ABOUTME: Open/closed state of the task creation modal with an optional preselected goal
// ABOUTME: Owned by the application and shared by cloning the store handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use super::{Observable, Subscription};
use crate::models::GoalId;
use serde::{Deserialize, Serialize};

/// Task modal state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskModalState {
    /// Whether the modal is showing
    pub is_open: bool,
    /// Goal the new task should be attached to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<GoalId>,
}

/// Store for the task modal
#[derive(Debug, Clone, Default)]
pub struct TaskModalStore {
    state: Observable<TaskModalState>,
}

impl TaskModalStore {
    /// Create a closed modal store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal, optionally preselecting a goal
    pub fn open(&self, goal_id: Option<GoalId>) {
        self.state.set(TaskModalState {
            is_open: true,
            goal_id,
        });
    }

    /// Close the modal and clear the goal
    pub fn close(&self) {
        self.state.set(TaskModalState::default());
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> TaskModalState {
        self.state.get()
    }

    /// Whether the modal is showing
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.with(|state| state.is_open)
    }

    /// Listen for state changes
    pub fn subscribe(
        &self,
        listener: impl Fn(&TaskModalState) + Send + Sync + 'static,
    ) -> Subscription {
        self.state.subscribe(listener)
    }
}
