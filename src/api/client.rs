// ABOUTME: HTTP client for the remote goals REST API (goals, tasks, catalogs, decomposition)
// ABOUTME: Bearer-token JSON client that maps HTTP failures onto AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

//! Goals API client
//!
//! # Example
//! ```rust,no_run
//! use goalpace::api::{ApiClient, ApiClientConfig};
//! use goalpace::models::GoalId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(ApiClientConfig {
//!     base_url: "http://localhost:8080/api".to_owned(),
//!     token: Some("token".to_owned()),
//!     timeout_secs: 30,
//! })?;
//! let goal = client.get_goal(GoalId(1)).await?;
//! # Ok(())
//! # }
//! ```

use crate::config::env_or;
use crate::constants::{api, env_vars};
use crate::errors::{AppError, AppResult};
use crate::models::{
    DecompositionRequest, DecompositionResponse, Frequency, FrequencyId, Goal, GoalDraft, GoalId,
    GoalPatch, GoalStatus, Task, TaskDraft, TaskId, TaskPatch, Unit,
};
use crate::repository::GoalRepository;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::time::Duration;
use tracing::debug;

/// Goals API client configuration
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL, e.g. `http://localhost:8080/api`
    pub base_url: String,
    /// Bearer token sent with every request
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: api::DEFAULT_BASE_URL.to_owned(),
            token: None,
            timeout_secs: api::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiClientConfig {
    /// Load client configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(env_vars::API_BASE_URL)
                .unwrap_or_else(|_| api::DEFAULT_BASE_URL.to_owned()),
            token: env::var(env_vars::API_TOKEN)
                .ok()
                .filter(|token| !token.trim().is_empty()),
            timeout_secs: env_or(env_vars::HTTP_TIMEOUT_SECS, api::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Use a different base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Goals API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiClientConfig,
    http_client: Client,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: ApiClientConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    // Goals

    /// List all goals
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed
    pub async fn list_goals(&self) -> AppResult<Vec<Goal>> {
        self.fetch(Method::GET, "/goals", "Goals").await
    }

    /// Get a goal by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn get_goal(&self, id: GoalId) -> AppResult<Goal> {
        self.fetch(Method::GET, &format!("/goals/{id}"), &format!("Goal {id}"))
            .await
    }

    /// Create a goal
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed
    pub async fn create_goal(&self, draft: &GoalDraft) -> AppResult<Goal> {
        self.send_json(Method::POST, "/goals", draft, "Goal").await
    }

    /// Partially update a goal
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn update_goal(&self, id: GoalId, patch: &GoalPatch) -> AppResult<Goal> {
        self.send_json(
            Method::PUT,
            &format!("/goals/{id}"),
            patch,
            &format!("Goal {id}"),
        )
        .await
    }

    /// Delete a goal
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn delete_goal(&self, id: GoalId) -> AppResult<()> {
        self.execute(Method::DELETE, &format!("/goals/{id}"), &format!("Goal {id}"))
            .await
    }

    // Tasks

    /// List all tasks
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed
    pub async fn list_tasks(&self) -> AppResult<Vec<Task>> {
        self.fetch(Method::GET, "/tasks", "Tasks").await
    }

    /// Get a task by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn get_task(&self, id: TaskId) -> AppResult<Task> {
        self.fetch(Method::GET, &format!("/tasks/{id}"), &format!("Task {id}"))
            .await
    }

    /// Create a task
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed
    pub async fn create_task(&self, draft: &TaskDraft) -> AppResult<Task> {
        self.send_json(Method::POST, "/tasks", draft, "Task").await
    }

    /// Partially update a task
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> AppResult<Task> {
        self.send_json(
            Method::PUT,
            &format!("/tasks/{id}"),
            patch,
            &format!("Task {id}"),
        )
        .await
    }

    /// Delete a task
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn delete_task(&self, id: TaskId) -> AppResult<()> {
        self.execute(Method::DELETE, &format!("/tasks/{id}"), &format!("Task {id}"))
            .await
    }

    /// Mark a task completed
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn complete_task(&self, id: TaskId) -> AppResult<Task> {
        self.fetch(
            Method::POST,
            &format!("/tasks/{id}/complete"),
            &format!("Task {id}"),
        )
        .await
    }

    /// Clear a task's completion
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn uncomplete_task(&self, id: TaskId) -> AppResult<Task> {
        self.fetch(
            Method::POST,
            &format!("/tasks/{id}/uncomplete"),
            &format!("Task {id}"),
        )
        .await
    }

    // Catalogs

    /// List frequencies
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed
    pub async fn list_frequencies(&self) -> AppResult<Vec<Frequency>> {
        self.fetch(Method::GET, "/frequencies", "Frequencies").await
    }

    /// List units
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed
    pub async fn list_units(&self) -> AppResult<Vec<Unit>> {
        self.fetch(Method::GET, "/units", "Units").await
    }

    /// List goal statuses
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed
    pub async fn list_goal_statuses(&self) -> AppResult<Vec<GoalStatus>> {
        self.fetch(Method::GET, "/goal-statuses", "Goal statuses")
            .await
    }

    /// Ask the server to decompose a goal
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the server does not know the goal or
    /// frequency
    pub async fn remote_decompose(
        &self,
        request: &DecompositionRequest,
    ) -> AppResult<DecompositionResponse> {
        self.send_json(Method::POST, "/goals/decompose", request, "Decomposition")
            .await
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "Goals API request");
        let builder = self.http_client.request(method, url);
        match &self.config.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        resource: &str,
    ) -> AppResult<T> {
        let response = self.request(method, path).send().await?;
        Ok(check_status(response, resource).await?.json().await?)
    }

    async fn send_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        resource: &str,
    ) -> AppResult<T> {
        let response = self.request(method, path).json(body).send().await?;
        Ok(check_status(response, resource).await?.json().await?)
    }

    async fn execute(&self, method: Method, path: &str, resource: &str) -> AppResult<()> {
        let response = self.request(method, path).send().await?;
        check_status(response, resource).await?;
        Ok(())
    }
}

/// Map a non-success status to an error
async fn check_status(response: Response, resource: &str) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(AppError::not_found(resource).with_resource_id(response.url().to_string()));
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    Err(
        AppError::external_service(api::SERVICE_NAME, format!("HTTP {status}: {body}"))
            .with_resource_id(url),
    )
}

#[async_trait]
impl GoalRepository for ApiClient {
    async fn load_goal(&self, id: GoalId) -> AppResult<Goal> {
        self.get_goal(id).await
    }

    async fn load_frequency(&self, id: FrequencyId) -> AppResult<Frequency> {
        self.list_frequencies()
            .await?
            .into_iter()
            .find(|frequency| frequency.id == id)
            .ok_or_else(|| {
                AppError::not_found(format!("Frequency {id}")).with_resource_id(id.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new(
            ApiClientConfig::default().with_base_url("http://localhost:9000/api/"),
        )
        .unwrap();
        assert_eq!(client.url("/goals/3"), "http://localhost:9000/api/goals/3");
        assert_eq!(client.url("units"), "http://localhost:9000/api/units");
    }
}
