// ABOUTME: Core types for the goalpace goal decomposition engine
// ABOUTME: Foundation crate with error handling, wire models, and time parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

#![deny(unsafe_code)]

//! # Goalpace Core
//!
//! Foundation crate providing the types shared by the decomposition engine,
//! the data layer and the remote API client. It changes rarely, so the main
//! crate recompiles independently of it.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the JSON error body
//! - **models**: goals, tasks, catalogs, and decomposition shapes
//! - **time**: lenient instant parsing for deadlines

/// Unified error handling system with standard error codes
pub mod errors;

/// Wire models and identifier newtypes
pub mod models;

/// Instant parsing and serde adapters
pub mod time;
