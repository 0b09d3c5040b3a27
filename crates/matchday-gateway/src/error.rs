//! Error types for the Gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use matchday_agent::SimulationError;
use matchday_core::ValidationError;

use crate::config::ENV_API_KEY;

/// Gateway error type
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{0} environment variable is not set")]
    MissingCredential(&'static str),

    #[error("{0}")]
    Simulation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn missing_api_key() -> Self {
        GatewayError::MissingCredential(ENV_API_KEY)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) | GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Serialization(e.to_string())
    }
}

impl From<SimulationError> for GatewayError {
    fn from(e: SimulationError) -> Self {
        match e {
            SimulationError::Validation(e) => GatewayError::Validation(e),
            failed @ SimulationError::Failed { .. } => GatewayError::Simulation(failed.to_string()),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            json!({
                "error": "Internal Server Error",
                "message": self.to_string(),
            })
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
            json!({ "error": self.to_string() })
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for Gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
