// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Validates capacity model selection, numeric fallbacks and API client settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use goalpace::api::ApiClientConfig;
use goalpace::config::{AppConfig, DecompositionConfig, Environment};
use goalpace::constants::{api, decomposition, env_vars};
use goalpace::errors::ErrorCode;
use goalpace::intelligence::CapacityModel;
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 9] = [
    env_vars::CAPACITY_MODEL,
    env_vars::BASE_CAPACITY,
    env_vars::IMPORTANCE_WEIGHT,
    env_vars::MAX_SEARCH_OCCURRENCES,
    env_vars::MAX_SEARCH_HORIZON_DAYS,
    env_vars::API_BASE_URL,
    env_vars::API_TOKEN,
    env_vars::HTTP_TIMEOUT_SECS,
    env_vars::ENVIRONMENT,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.decomposition, DecompositionConfig::default());
    assert_eq!(config.decomposition.capacity_model, CapacityModel::Unbounded);
    assert_eq!(config.api.base_url, api::DEFAULT_BASE_URL);
    assert_eq!(config.api.token, None);
    assert_eq!(config.api.timeout_secs, api::DEFAULT_TIMEOUT_SECS);
}

#[test]
#[serial]
fn test_difficulty_scaled_model_with_overrides() {
    clear_env();
    env::set_var(env_vars::CAPACITY_MODEL, "difficulty_scaled");
    env::set_var(env_vars::BASE_CAPACITY, "20");
    env::set_var(env_vars::IMPORTANCE_WEIGHT, "0.25");

    let config = DecompositionConfig::from_env().unwrap();

    assert_eq!(
        config.capacity_model,
        CapacityModel::DifficultyScaled {
            base: 20.0,
            importance_weight: 0.25,
        }
    );
    clear_env();
}

#[test]
#[serial]
fn test_fixed_model_uses_base_capacity() {
    clear_env();
    env::set_var(env_vars::CAPACITY_MODEL, "Fixed");
    env::set_var(env_vars::BASE_CAPACITY, "4.5");

    let config = DecompositionConfig::from_env().unwrap();

    assert_eq!(
        config.capacity_model,
        CapacityModel::Fixed {
            per_occurrence: 4.5
        }
    );
    clear_env();
}

#[test]
#[serial]
fn test_unknown_capacity_model_is_config_error() {
    clear_env();
    env::set_var(env_vars::CAPACITY_MODEL, "optimistic");

    let err = AppConfig::from_env().unwrap_err();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains(env_vars::CAPACITY_MODEL));
    clear_env();
}

#[test]
#[serial]
fn test_invalid_numbers_fall_back_to_defaults() {
    clear_env();
    env::set_var(env_vars::MAX_SEARCH_OCCURRENCES, "lots");
    env::set_var(env_vars::MAX_SEARCH_HORIZON_DAYS, "-5");
    env::set_var(env_vars::HTTP_TIMEOUT_SECS, "soon");

    let config = AppConfig::from_env().unwrap();

    assert_eq!(
        config.decomposition.max_search_occurrences,
        decomposition::DEFAULT_MAX_SEARCH_OCCURRENCES
    );
    assert_eq!(
        config.decomposition.max_search_horizon_days,
        decomposition::DEFAULT_MAX_SEARCH_HORIZON_DAYS
    );
    assert_eq!(config.api.timeout_secs, api::DEFAULT_TIMEOUT_SECS);
    clear_env();
}

#[test]
#[serial]
fn test_search_limits_from_environment() {
    clear_env();
    env::set_var(env_vars::MAX_SEARCH_OCCURRENCES, "500");
    env::set_var(env_vars::MAX_SEARCH_HORIZON_DAYS, "90");

    let config = DecompositionConfig::from_env().unwrap();

    assert_eq!(config.max_search_occurrences, 500);
    assert_eq!(config.max_search_horizon_days, 90);
    clear_env();
}

#[test]
#[serial]
fn test_api_client_settings_and_summary() {
    clear_env();
    env::set_var(env_vars::API_BASE_URL, "https://goals.example.com/api");
    env::set_var(env_vars::API_TOKEN, "s3cret");
    env::set_var(env_vars::ENVIRONMENT, "production");

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.api.base_url, "https://goals.example.com/api");
    assert_eq!(config.api.token.as_deref(), Some("s3cret"));

    let summary = config.summary();
    assert!(summary.contains("https://goals.example.com/api"));
    assert!(summary.contains("configured"));
    assert!(!summary.contains("s3cret"));
    clear_env();
}

#[test]
#[serial]
fn test_blank_token_is_ignored() {
    clear_env();
    env::set_var(env_vars::API_TOKEN, "   ");

    assert_eq!(ApiClientConfig::from_env().token, None);
    clear_env();
}

#[test]
fn test_environment_names() {
    assert_eq!(
        Environment::from_str_or_default("testing"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("unknown"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}
