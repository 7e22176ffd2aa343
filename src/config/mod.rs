// ABOUTME: Configuration management module for goalpace
// ABOUTME: Environment-only configuration with typed sections and constant defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! Configuration module
//!
//! Configuration is read from environment variables only. Each section has a
//! `from_env()` constructor and a `Default` built from `crate::constants`.
//!
//! - **Environment**: deployment mode and the assembled [`AppConfig`]
//! - **Decomposition**: capacity model and deadline search bounds

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Decomposition engine configuration
pub mod decomposition;
/// Environment and application configuration
pub mod environment;

pub use decomposition::DecompositionConfig;
pub use environment::{AppConfig, Environment};

/// Read and parse an environment variable, falling back to `default` when it
/// is unset or unparsable
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, %default, "Invalid value in environment, using default");
            default
        }),
        Err(_) => default,
    }
}
