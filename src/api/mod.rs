// ABOUTME: Remote goals API integration
// ABOUTME: Re-exports the reqwest-based client and its configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

/// Goals REST API client
pub mod client;

pub use client::{ApiClient, ApiClientConfig};
