// ABOUTME: Reference catalog models served by the API: frequencies, units, goal statuses
// ABOUTME: These lists are managed externally and read-only from the client's perspective
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use super::FrequencyId;
use serde::{Deserialize, Serialize};

/// A named recurrence pattern.
///
/// `name` is parsed into a recurrence by the decomposition engine, e.g.
/// `"daily"`, `"weekly:mon,thu"` or `"monthly:31"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    /// Frequency identifier
    pub id: FrequencyId,
    /// Recurrence pattern label
    pub name: String,
}

impl Frequency {
    /// Create a frequency snapshot
    pub fn new(id: FrequencyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Measurement unit for goal quantities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit identifier
    pub id: i64,
    /// Short code, e.g. `km`
    pub code: String,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
}

/// Lifecycle status of a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalStatus {
    /// Status identifier
    pub id: i64,
    /// Display name
    pub name: String,
}
