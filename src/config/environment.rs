// ABOUTME: Application configuration assembled from environment variables
// ABOUTME: Deployment environment plus decomposition and API client settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! Environment-based configuration

use super::DecompositionConfig;
use crate::api::ApiClientConfig;
use crate::constants::env_vars;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Decomposition engine settings
    pub decomposition: DecompositionConfig,
    /// Remote goals API settings
    pub api: ApiClientConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable holds a value that cannot be
    /// defaulted, such as an unknown capacity model name
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            environment: Environment::from_str_or_default(
                &env::var(env_vars::ENVIRONMENT).unwrap_or_default(),
            ),
            decomposition: DecompositionConfig::from_env()?,
            api: ApiClientConfig::from_env(),
        };

        info!(
            environment = %config.environment,
            capacity_model = %config.decomposition.capacity_model,
            api_base_url = %config.api.base_url,
            "Configuration loaded successfully"
        );
        Ok(config)
    }

    /// Summary for logging, without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "goalpace configuration:\n\
             - Environment: {}\n\
             - Capacity model: {}\n\
             - Search cap: {} occurrences / {} days\n\
             - API base URL: {}\n\
             - API token: {}",
            self.environment,
            self.decomposition.capacity_model,
            self.decomposition.max_search_occurrences,
            self.decomposition.max_search_horizon_days,
            self.api.base_url,
            if self.api.token.is_some() {
                "configured"
            } else {
                "not set"
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_summary_hides_token() {
        let config = AppConfig {
            environment: Environment::Testing,
            decomposition: DecompositionConfig::default(),
            api: ApiClientConfig {
                token: Some("secret-token".to_owned()),
                ..ApiClientConfig::default()
            },
        };
        let summary = config.summary();
        assert!(summary.contains("configured"));
        assert!(!summary.contains("secret-token"));
    }
}
