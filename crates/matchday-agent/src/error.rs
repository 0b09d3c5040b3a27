//! Error types for providers and the simulation pipeline

use matchday_core::{ReportError, SchemaError, ValidationError};
use thiserror::Error;

/// Failures talking to a generative-model provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request to {provider} failed: {message}")]
    Transport { provider: String, message: String },

    #[error("{provider} API error ({status}): {body}")]
    Api {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Malformed {provider} response: {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

/// Failures of a single report request
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Empty response from model")]
    EmptyResponse,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Schema validation failed: {0}")]
    Schema(#[from] SchemaError),
}

/// What the caller of a simulation gets back.
///
/// Input problems keep their structure; everything after the input stage is
/// flattened into `Failed` with a readable message.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to simulate match: {message}")]
    Failed { message: String },
}

impl SimulationError {
    pub fn failed(message: impl Into<String>) -> Self {
        SimulationError::Failed {
            message: message.into(),
        }
    }

    /// True when the caller sent bad input
    pub fn is_client_error(&self) -> bool {
        matches!(self, SimulationError::Validation(_))
    }
}

impl From<RequestError> for SimulationError {
    fn from(e: RequestError) -> Self {
        SimulationError::failed(e.to_string())
    }
}

impl From<ReportError> for SimulationError {
    fn from(e: ReportError) -> Self {
        SimulationError::failed(e.to_string())
    }
}
