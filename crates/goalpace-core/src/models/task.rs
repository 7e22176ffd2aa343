// ABOUTME: Task wire models: recurring tasks that contribute work toward a goal
// ABOUTME: Includes create and partial-update payloads for the remote API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use super::{FrequencyId, GoalId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recurring task, optionally attached to a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task identifier
    pub id: TaskId,
    /// Short title
    pub name: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Recurrence the task follows
    pub frequency_id: FrequencyId,
    /// Display name of the recurrence
    #[serde(default)]
    pub frequency_name: String,
    /// Goal this task feeds, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<GoalId>,
    /// Display name of the goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_name: Option<String>,
    /// Unit of the goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_unit: Option<String>,
    /// Completion timestamp of the current occurrence
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft-deletion timestamp
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Work contributed per occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl Task {
    /// Whether the current occurrence is done
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Payload for `POST /tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Short title
    pub name: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Recurrence
    pub frequency_id: FrequencyId,
    /// Goal to attach to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<GoalId>,
    /// Work per occurrence, typically the decomposition's `requiredQuantity`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

/// Payload for `PUT /tasks/{id}`
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_id: Option<FrequencyId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<GoalId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_deserializes_null_completion() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Run",
            "frequencyId": 1,
            "frequencyName": "daily",
            "goalId": 9,
            "completedAt": null,
            "createdAt": "2026-01-01T08:00:00Z",
            "quantity": 5.0
        }))
        .unwrap();

        assert_eq!(task.goal_id, Some(GoalId(9)));
        assert!(!task.is_completed());
        assert_eq!(task.quantity, Some(5.0));
    }

    #[test]
    fn test_draft_omits_absent_goal() {
        let draft = TaskDraft {
            name: "Stretch".to_owned(),
            description: None,
            frequency_id: FrequencyId(2),
            goal_id: None,
            quantity: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Stretch", "frequencyId": 2 })
        );
    }
}
