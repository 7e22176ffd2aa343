// ABOUTME: System-wide constants and default values for goalpace
// ABOUTME: Groups decomposition defaults, score bounds, API client defaults, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! # Constants Module
//!
//! Defaults used when the corresponding environment variable is absent or
//! unparsable. Configuration structs in `crate::config` read the variables
//! named in [`env_vars`] and fall back to these values.

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported by the logging layer
    pub const GOALPACE: &str = "goalpace";
    /// Crate target used for the log filter directive
    pub const LOG_TARGET: &str = "goalpace";
}

/// Bounds of the difficulty/importance scores
pub mod scores {
    /// Lowest accepted score
    pub const MIN_SCORE: u8 = 1;
    /// Highest accepted score
    pub const MAX_SCORE: u8 = 5;
    /// Neutral midpoint, no importance bias
    pub const MID_SCORE: u8 = 3;
}

/// Decomposition engine defaults
pub mod decomposition {
    /// Per-occurrence capacity at difficulty 1 for the difficulty-scaled model
    pub const DEFAULT_BASE_CAPACITY: f64 = 10.0;
    /// Capacity bonus per importance step relative to the midpoint
    pub const DEFAULT_IMPORTANCE_WEIGHT: f64 = 0.1;
    /// Maximum occurrences walked by the deadline search
    pub const DEFAULT_MAX_SEARCH_OCCURRENCES: u32 = 100_000;
    /// Furthest a suggested deadline may lie beyond `now`, in days
    pub const DEFAULT_MAX_SEARCH_HORIZON_DAYS: i64 = 3_650;
}

/// Remote API client defaults
pub mod api {
    /// Base URL of the goals API
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
    /// Request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Name used when reporting upstream failures
    pub const SERVICE_NAME: &str = "Goals API";
}

/// Toast notification defaults
pub mod toast {
    /// Display duration when none is given, in milliseconds
    pub const DEFAULT_DURATION_MS: u64 = 3_000;
}

/// Environment variable names
pub mod env_vars {
    /// `unbounded`, `fixed`, or `difficulty_scaled`
    pub const CAPACITY_MODEL: &str = "GOALPACE_CAPACITY_MODEL";
    /// Base capacity for `fixed` and `difficulty_scaled`
    pub const BASE_CAPACITY: &str = "GOALPACE_BASE_CAPACITY";
    /// Importance weight for `difficulty_scaled`
    pub const IMPORTANCE_WEIGHT: &str = "GOALPACE_IMPORTANCE_WEIGHT";
    /// Deadline search iteration cap
    pub const MAX_SEARCH_OCCURRENCES: &str = "GOALPACE_MAX_SEARCH_OCCURRENCES";
    /// Deadline search horizon in days
    pub const MAX_SEARCH_HORIZON_DAYS: &str = "GOALPACE_MAX_SEARCH_HORIZON_DAYS";
    /// Remote API base URL
    pub const API_BASE_URL: &str = "GOALPACE_API_BASE_URL";
    /// Bearer token for the remote API
    pub const API_TOKEN: &str = "GOALPACE_API_TOKEN";
    /// HTTP timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "GOALPACE_HTTP_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
