// ABOUTME: Error types for goalpace, re-exported from the goalpace-core crate
// ABOUTME: Keeps crate::errors paths stable for engine, data layer, and CLI code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! # Unified Error Handling
//!
//! The error types live in `goalpace-core` so the wire models and the
//! conversions from `serde_json` and `reqwest` errors can share them. This
//! module re-exports them under the main crate.

pub use goalpace_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
