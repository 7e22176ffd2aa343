// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors
// ABOUTME: Re-exports command modules for goalpace-cli
// ABOUTME: Local decomposition, remote decomposition, and occurrence listing

pub mod decompose;
pub mod occurrences;
pub mod remote;
