// ABOUTME: Main library entry point for the goalpace goal decomposition engine
// ABOUTME: Splits goals into per-occurrence quantities and judges deadline feasibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

#![deny(unsafe_code)]

//! # goalpace
//!
//! Given a goal (target quantity, progress so far, deadline, difficulty and
//! importance scores) and a recurring frequency, goalpace computes how much
//! work each occurrence must carry, whether that pace is realistic, and, when
//! it is not, a later deadline that would be.
//!
//! ## Architecture
//!
//! - **Intelligence**: recurrence calculus, capacity models, decomposition engine
//! - **Repository**: async data layer loading goal and frequency snapshots
//! - **API**: reqwest client of the remote goals REST API
//! - **Services**: request-level decomposition over a repository
//! - **State**: observable toast and task-modal stores
//! - **Config**: environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use goalpace::intelligence::{DecompositionEngine, Recurrence};
//! use goalpace::models::{Goal, GoalId};
//!
//! let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
//! let goal = Goal::new(GoalId(1), 100.0, now + Duration::days(10)).with_progress(20.0);
//!
//! let result = DecompositionEngine::default()
//!     .decompose(&goal, &Recurrence::Daily, None, now)
//!     .unwrap();
//! assert_eq!(result.occurrences, 10);
//! assert!(result.feasibility.is_feasible());
//! ```

/// Remote goals API client
pub mod api;

/// Configuration management
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Error types
pub mod errors;

/// Recurrence, capacity, and decomposition
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Goal and frequency data layer
pub mod repository;

/// Request-level services
pub mod services;

/// Observable UI state stores
pub mod state;

/// Wire models shared with the goals API
pub use goalpace_core::models;

/// Instant parsing and serde adapters
pub use goalpace_core::time;
