// ABOUTME: Goal intelligence: recurrence calculus, capacity models, and decomposition
// ABOUTME: Pure synchronous computations with no I/O and no clock reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! # Intelligence Module
//!
//! - [`recurrence`]: parses frequency labels and counts calendar occurrences
//! - [`capacity`]: maps difficulty and importance to a per-occurrence limit
//! - [`decomposition`]: splits remaining work into a per-occurrence quantity
//!   and judges whether the deadline is realistic

/// Per-occurrence capacity models
pub mod capacity;
/// Decomposition engine
pub mod decomposition;
/// Recurrence patterns and occurrence counting
pub mod recurrence;

pub use capacity::{Capacity, CapacityModel};
pub use decomposition::DecompositionEngine;
pub use recurrence::{Occurrences, Recurrence};
