// ABOUTME: Goal wire models: the stored goal snapshot plus create and partial-update payloads
// ABOUTME: Field names follow the remote API's camelCase JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use super::GoalId;
use crate::time::flexible;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Neutral score used when the API omits difficulty or importance
pub const DEFAULT_SCORE: u8 = 3;

const fn default_score() -> u8 {
    DEFAULT_SCORE
}

/// A long-term goal: reach `target_quantity` units of work by `deadline`.
///
/// The decomposition engine treats this as a read-only snapshot. Only
/// `target_quantity`, `current_progress`, `deadline`, `difficulty` and
/// `importance` take part in the computation; the remaining fields are carried
/// so the same type can round-trip through the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Goal identifier
    pub id: GoalId,
    /// Short title
    #[serde(default)]
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Code of the unit the quantities are expressed in
    #[serde(default)]
    pub unit_code: String,
    /// Display name of the unit, resolved by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    /// Total amount of work to reach
    pub target_quantity: f64,
    /// Amount of work already accumulated
    #[serde(default)]
    pub current_progress: f64,
    /// Progress the user should have reached by now, computed server side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_progress: Option<f64>,
    /// Point in time the target must be reached by
    #[serde(with = "flexible")]
    pub deadline: DateTime<Utc>,
    /// Difficulty score, 1 (easy) to 5 (hard)
    #[serde(default = "default_score")]
    pub difficulty: u8,
    /// Importance score, 1 (minor) to 5 (critical)
    #[serde(default = "default_score")]
    pub importance: u8,
    /// Why the user wants this
    #[serde(default)]
    pub reason: String,
    /// Self-promised reward on success
    #[serde(default)]
    pub reward: String,
    /// Self-imposed penalty on failure
    #[serde(default)]
    pub punishment: String,
    /// Status identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,
    /// Status display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Goal {
    /// Minimal snapshot with neutral scores and no progress
    #[must_use]
    pub fn new(id: GoalId, target_quantity: f64, deadline: DateTime<Utc>) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            unit_code: String::new(),
            unit_name: None,
            target_quantity,
            current_progress: 0.0,
            ideal_progress: None,
            deadline,
            difficulty: DEFAULT_SCORE,
            importance: DEFAULT_SCORE,
            reason: String::new(),
            reward: String::new(),
            punishment: String::new(),
            status_id: None,
            status_name: None,
            created_at: None,
        }
    }

    /// Set the accumulated progress
    #[must_use]
    pub fn with_progress(mut self, current_progress: f64) -> Self {
        self.current_progress = current_progress;
        self
    }

    /// Set difficulty and importance scores
    #[must_use]
    pub fn with_scores(mut self, difficulty: u8, importance: u8) -> Self {
        self.difficulty = difficulty;
        self.importance = importance;
        self
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Payload for `POST /goals`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    /// Short title
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Unit code
    pub unit_code: String,
    /// Total amount of work to reach
    pub target_quantity: f64,
    /// Amount of work already accumulated
    pub current_progress: f64,
    /// Expected progress at this point, if tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideal_progress: Option<f64>,
    /// Deadline
    #[serde(with = "flexible")]
    pub deadline: DateTime<Utc>,
    /// Difficulty score
    pub difficulty: u8,
    /// Importance score
    pub importance: u8,
    /// Motivation
    pub reason: String,
    /// Reward
    pub reward: String,
    /// Penalty
    pub punishment: String,
    /// Initial status
    pub status_id: i64,
}

/// Payload for `PUT /goals/{id}`; absent fields are left unchanged
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punishment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_goal_accepts_bare_date_deadline_and_defaults() {
        let goal: Goal = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Read books",
            "targetQuantity": 12.0,
            "deadline": "2026-12-31"
        }))
        .unwrap();

        assert_eq!(goal.id, GoalId(7));
        assert_eq!(goal.deadline, Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap());
        assert_eq!(goal.difficulty, DEFAULT_SCORE);
        assert!(goal.current_progress.abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_rejects_malformed_deadline() {
        let result: Result<Goal, _> = serde_json::from_value(serde_json::json!({
            "id": 7,
            "targetQuantity": 12.0,
            "deadline": "someday"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_only_serializes_present_fields() {
        let patch = GoalPatch {
            current_progress: Some(40.0),
            ..GoalPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "currentProgress": 40.0 }));
    }
}
