//! HTTP access to a running Diligence server.

use crate::CliResult;
use clap::Args;
use diligence_core::AnalysisData;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shown after a failed fetch. Requests are never retried automatically.
pub const RETRY_HINT: &str = "Failed to analyze code. Please try again.";

/// Connection arguments shared by commands that talk to the server.
#[derive(Args, Clone, Debug)]
pub struct ServerArgs {
    /// Base URL of the Diligence server.
    #[arg(long, env = "DILIGENCE_API_URL", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,
    /// Request timeout in seconds.
    #[arg(long = "timeout-secs", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Health payload returned by `GET /api/health`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    /// Liveness marker, `ok` when the server is up.
    pub status: String,
    /// Server time of the check.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Error envelope returned by the server.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    /// Short failure message.
    pub error: String,
    /// Extra context, only sent by servers in development mode.
    #[serde(default)]
    pub details: Option<String>,
}

/// Non-success response from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Parsed envelope, when the body was one.
    pub envelope: Option<ErrorEnvelope>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.envelope {
            Some(ErrorEnvelope {
                error,
                details: Some(details),
            }) => write!(f, "server returned {}: {error} ({details})", self.status),
            Some(ErrorEnvelope { error, .. }) => {
                write!(f, "server returned {}: {error}", self.status)
            }
            None => write!(f, "server returned {}", self.status),
        }
    }
}

impl std::error::Error for ApiError {}

/// Abstraction over the analysis API for testability.
pub trait AnalysisClient {
    fn fetch_analysis<'a>(
        &'a self,
        server_url: &'a str,
    ) -> Pin<Box<dyn Future<Output = CliResult<AnalysisData>> + Send + 'a>>;

    fn fetch_health<'a>(
        &'a self,
        server_url: &'a str,
    ) -> Pin<Box<dyn Future<Output = CliResult<HealthStatus>> + Send + 'a>>;
}

/// Reqwest-backed analysis client.
pub struct ReqwestAnalysisClient {
    client: Client,
}

impl ReqwestAnalysisClient {
    /// Build a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> CliResult<Self> {
        let client = Client::builder()
            .user_agent("diligence-cli")
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl AnalysisClient for ReqwestAnalysisClient {
    fn fetch_analysis<'a>(
        &'a self,
        server_url: &'a str,
    ) -> Pin<Box<dyn Future<Output = CliResult<AnalysisData>> + Send + 'a>> {
        Box::pin(fetch_analysis(&self.client, server_url))
    }

    fn fetch_health<'a>(
        &'a self,
        server_url: &'a str,
    ) -> Pin<Box<dyn Future<Output = CliResult<HealthStatus>> + Send + 'a>> {
        Box::pin(fetch_health(&self.client, server_url))
    }
}

/// Validate and normalize the server URL.
pub fn normalize_server_url(server_url: &str) -> CliResult<String> {
    let trimmed = server_url.trim();
    if trimmed.is_empty() {
        return Err("server url is required".into());
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

async fn fetch_analysis(client: &Client, server_url: &str) -> CliResult<AnalysisData> {
    let url = format!("{server_url}/api/analysis");
    let response = check_status(client.get(url).send().await?).await?;
    Ok(response.json::<AnalysisData>().await?)
}

async fn fetch_health(client: &Client, server_url: &str) -> CliResult<HealthStatus> {
    let url = format!("{server_url}/api/health");
    let response = check_status(client.get(url).send().await?).await?;
    Ok(response.json::<HealthStatus>().await?)
}

async fn check_status(response: Response) -> CliResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let envelope = serde_json::from_str::<ErrorEnvelope>(&body).ok();
    Err(Box::new(ApiError {
        status: status.as_u16(),
        envelope,
    }))
}
