// ABOUTME: Wire models shared by the engine, the data layer, and the API client
// ABOUTME: Identifier newtypes plus goal, task, catalog, and decomposition types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! Data models
//!
//! All structs mirror the remote API's camelCase JSON. Identifiers are
//! integer newtypes so a goal id cannot be passed where a frequency id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference catalogs (frequencies, units, statuses)
pub mod catalog;
/// Decomposition request, response, and typed result
pub mod decomposition;
/// Goal snapshot and payloads
pub mod goal;
/// Task snapshot and payloads
pub mod task;

pub use catalog::{Frequency, GoalStatus, Unit};
pub use decomposition::{
    DecompositionRequest, DecompositionResponse, DecompositionResult, Feasibility,
};
pub use goal::{Goal, GoalDraft, GoalPatch, DEFAULT_SCORE};
pub use task::{Task, TaskDraft, TaskPatch};

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

integer_id!(
    /// Identifier of a goal
    GoalId
);
integer_id!(
    /// Identifier of a frequency
    FrequencyId
);
integer_id!(
    /// Identifier of a task
    TaskId
);
