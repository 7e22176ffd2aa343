// ABOUTME: Domain service layer combining the data layer with the decomposition engine
// ABOUTME: Protocol-agnostic entry points reusable from the CLI and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! Domain service layer

/// Goal decomposition by goal and frequency id
pub mod decomposition;

pub use decomposition::DecompositionService;
