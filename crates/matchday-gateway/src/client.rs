//! Client for a running Matchday gateway

use serde_json::Value;
use thiserror::Error;

use matchday_core::{MatchReport, SimulateMatchRequest, Team};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("could not reach gateway: {0}")]
    Transport(String),

    /// Non-2xx answer, message taken from the error body
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("gateway returned an unreadable report: {0}")]
    Decode(String),
}

/// Client for connecting to a Matchday gateway
#[derive(Debug, Clone)]
pub struct GatewayClient {
    endpoint: String,
    http: reqwest::Client,
}

impl GatewayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the gateway to simulate a fixture
    pub async fn simulate(&self, home: &Team, away: &Team) -> Result<MatchReport, ClientError> {
        let body = self.post("simulate-match", home, away).await?;
        MatchReport::from_json(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Ask the gateway for the rendered HTML match page
    pub async fn simulate_page(&self, home: &Team, away: &Team) -> Result<String, ClientError> {
        self.post("simulate-match/page", home, away).await
    }

    async fn post(&self, path: &str, home: &Team, away: &Team) -> Result<String, ClientError> {
        let request = SimulateMatchRequest::new(home.clone(), away.clone());
        let url = format!("{}/{}", self.endpoint, path);
        tracing::debug!(%url, "posting fixture to gateway");

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        Ok(body)
    }
}

/// Message to show for a failed response: the body's `message`, else its
/// `error`, else a generic status line.
pub fn error_message(status: u16, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let field = |key: &str| {
        parsed
            .as_ref()
            .and_then(|v| v.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    field("message")
        .or_else(|| field("error"))
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}
