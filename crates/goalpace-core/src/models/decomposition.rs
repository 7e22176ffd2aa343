// ABOUTME: Decomposition request/response wire shapes and the engine's typed result
// ABOUTME: Feasibility is a sum type so a shortfall can only exist on an infeasible result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use super::{FrequencyId, GoalId};
use crate::time::flexible_option;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /goals/decompose`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompositionRequest {
    /// Goal to decompose
    pub goal_id: GoalId,
    /// Recurrence to spread the work over
    pub frequency_id: FrequencyId,
    /// Per-occurrence quantity to evaluate instead of deriving one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl DecompositionRequest {
    /// Request without a quantity override
    #[must_use]
    pub const fn new(goal_id: GoalId, frequency_id: FrequencyId) -> Self {
        Self {
            goal_id,
            frequency_id,
            quantity: None,
        }
    }

    /// Evaluate a caller-chosen per-occurrence quantity
    #[must_use]
    pub const fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

/// Response of `POST /goals/decompose`.
///
/// Absent values serialize as explicit `null`, matching the API contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompositionResponse {
    /// Quantity per occurrence
    pub required_quantity: f64,
    /// `true`, `false`, or `null` when indeterminate
    pub feasible: Option<bool>,
    /// Later deadline that would make the pace feasible
    #[serde(default, with = "flexible_option")]
    pub suggested_deadline: Option<DateTime<Utc>>,
    /// Work that cannot be completed by the original deadline
    pub value_shortfall: Option<f64>,
}

/// Whether the required pace can be sustained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Feasibility {
    /// The pace fits within the per-occurrence capacity
    Feasible,
    /// The pace exceeds capacity; `value_shortfall` cannot be done in time
    Infeasible {
        /// Remaining work left over at the original deadline, always `>= 0`
        value_shortfall: f64,
    },
    /// No occurrence falls before the deadline while work remains
    Indeterminate,
}

impl Feasibility {
    /// Tri-state flag used on the wire
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Feasible => Some(true),
            Self::Infeasible { .. } => Some(false),
            Self::Indeterminate => None,
        }
    }

    /// Shortfall, present only for infeasible results
    #[must_use]
    pub const fn value_shortfall(&self) -> Option<f64> {
        match self {
            Self::Infeasible { value_shortfall } => Some(*value_shortfall),
            Self::Feasible | Self::Indeterminate => None,
        }
    }

    /// Whether the pace is sustainable
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible)
    }
}

/// Outcome of decomposing a goal over a recurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    /// Quantity needed per occurrence (or the echoed override)
    pub required_quantity: f64,
    /// Feasibility verdict
    pub feasibility: Feasibility,
    /// Earliest later deadline at which the pace suffices
    pub suggested_deadline: Option<DateTime<Utc>>,
    /// Occurrences between now and the original deadline
    pub occurrences: u32,
}

impl From<&DecompositionResult> for DecompositionResponse {
    fn from(result: &DecompositionResult) -> Self {
        Self {
            required_quantity: result.required_quantity,
            feasible: result.feasibility.as_flag(),
            suggested_deadline: result.suggested_deadline,
            value_shortfall: result.feasibility.value_shortfall(),
        }
    }
}

impl From<DecompositionResult> for DecompositionResponse {
    fn from(result: DecompositionResult) -> Self {
        Self::from(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_response_serializes_nulls() {
        let result = DecompositionResult {
            required_quantity: 80.0,
            feasibility: Feasibility::Indeterminate,
            suggested_deadline: None,
            occurrences: 0,
        };
        let json = serde_json::to_value(DecompositionResponse::from(&result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "requiredQuantity": 80.0,
                "feasible": null,
                "suggestedDeadline": null,
                "valueShortfall": null
            })
        );
    }

    #[test]
    fn test_infeasible_result_exposes_shortfall() {
        let deadline = Utc.with_ymd_and_hms(2026, 5, 17, 0, 0, 0).unwrap();
        let result = DecompositionResult {
            required_quantity: 8.0,
            feasibility: Feasibility::Infeasible {
                value_shortfall: 30.0,
            },
            suggested_deadline: Some(deadline),
            occurrences: 10,
        };
        let response = DecompositionResponse::from(result);
        assert_eq!(response.feasible, Some(false));
        assert_eq!(response.value_shortfall, Some(30.0));
        assert_eq!(response.suggested_deadline, Some(deadline));
    }

    #[test]
    fn test_request_reads_camel_case() {
        let request: DecompositionRequest = serde_json::from_value(serde_json::json!({
            "goalId": 1,
            "frequencyId": 2,
            "quantity": 4.5
        }))
        .unwrap();
        assert_eq!(
            request,
            DecompositionRequest::new(GoalId(1), FrequencyId(2)).with_quantity(4.5)
        );
    }
}
