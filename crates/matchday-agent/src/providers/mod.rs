//! Generative-model providers
//!
//! A provider takes a prompt and a response schema and returns the model's raw
//! text. Parsing and validation happen above this layer.

pub mod gemini;
pub mod replay;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ProviderError;

pub use gemini::GeminiClient;
pub use replay::ReplayProvider;

/// Provider trait - implemented by every model backend
#[async_trait]
pub trait ReportProvider: Send + Sync + std::fmt::Debug {
    /// Provider name, used in logs and error messages
    fn name(&self) -> &str;

    /// Generate JSON output constrained by `schema`.
    ///
    /// Returns the raw text exactly as produced; an empty string means the
    /// model produced nothing.
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String, ProviderError>;
}
