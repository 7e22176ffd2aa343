// ABOUTME: Unit tests for logging functionality
// ABOUTME: Validates logging configuration from environment and command-line verbosity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use goalpace::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

fn clear_logging_env() {
    for key in [
        "RUST_LOG",
        "LOG_FORMAT",
        "ENVIRONMENT",
        "SERVICE_NAME",
        "SERVICE_VERSION",
        "LOG_INCLUDE_LOCATION",
        "LOG_INCLUDE_THREAD",
        "LOG_INCLUDE_SPANS",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    // Production always carries location and thread
    assert!(config.include_location);
    assert!(config.include_thread);
    assert!(!config.include_spans);

    clear_logging_env();
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "goalpace");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_compact_format_and_span_events() {
    clear_logging_env();
    env::set_var("LOG_FORMAT", "compact");
    env::set_var("LOG_INCLUDE_SPANS", "1");

    let config = LoggingConfig::from_env();

    assert_eq!(config.format, LogFormat::Compact);
    assert!(config.include_spans);
    assert!(!config.include_location);

    clear_logging_env();
}

#[test]
fn test_cli_verbosity_levels() {
    assert_eq!(LoggingConfig::for_cli(0).level, "warn");
    assert_eq!(LoggingConfig::for_cli(1).level, "info");
    assert_eq!(LoggingConfig::for_cli(2).level, "debug");
    assert_eq!(LoggingConfig::for_cli(7).level, "trace");
    assert_eq!(LoggingConfig::for_cli(1).format, LogFormat::Compact);
}

#[test]
#[serial]
fn test_env_filter_includes_crate_directive() {
    clear_logging_env();

    let filter = LoggingConfig::for_cli(2).env_filter().to_string();

    assert!(filter.contains("goalpace=debug"), "filter: {filter}");
    assert!(filter.contains("reqwest=warn"), "filter: {filter}");
}
