// ABOUTME: Remote decomposition command for goalpace-cli
// ABOUTME: Loads goal and frequency through the goals API, or delegates to the server endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 goalpace contributors

use crate::helpers::display::{print_response, print_result};
use crate::OutputFormat;
use chrono::Utc;
use clap::Args;
use goalpace::api::{ApiClient, ApiClientConfig};
use goalpace::config::DecompositionConfig;
use goalpace::errors::AppResult;
use goalpace::intelligence::DecompositionEngine;
use goalpace::models::{DecompositionRequest, FrequencyId, GoalId};
use goalpace::services::DecompositionService;
use tracing::info;

/// Identifiers of the goal and frequency to decompose
#[derive(Debug, Args)]
pub struct RemoteArgs {
    /// Goal id
    #[arg(long)]
    goal_id: i64,

    /// Frequency id
    #[arg(long)]
    frequency_id: i64,

    /// Fixed quantity per occurrence
    #[arg(long)]
    quantity: Option<f64>,

    /// API base URL (defaults to GOALPACE_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Ask the server's /goals/decompose endpoint instead of computing locally
    #[arg(long)]
    server_side: bool,
}

/// Run a decomposition against the goals API
pub async fn run(args: RemoteArgs, format: OutputFormat) -> AppResult<()> {
    let mut api_config = ApiClientConfig::from_env();
    if let Some(base_url) = args.base_url {
        api_config = api_config.with_base_url(base_url);
    }
    let client = ApiClient::new(api_config)?;

    let mut request = DecompositionRequest::new(GoalId(args.goal_id), FrequencyId(args.frequency_id));
    if let Some(quantity) = args.quantity {
        request = request.with_quantity(quantity);
    }

    if args.server_side {
        info!(base_url = %client.config().base_url, "Requesting server-side decomposition");
        let response = client.remote_decompose(&request).await?;
        return print_response(&response, format);
    }

    let service = DecompositionService::new(
        client,
        DecompositionEngine::new(DecompositionConfig::from_env()?),
    );
    let result = service.evaluate_at(&request, Utc::now()).await?;
    print_result(&result, format)
}
