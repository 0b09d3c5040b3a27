//! Replay provider
//!
//! Answers every request with a fixed text, e.g. a model response saved from
//! an earlier run. Useful for re-rendering a report offline and for tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::ReportProvider;
use crate::error::ProviderError;

#[derive(Debug)]
pub struct ReplayProvider {
    name: String,
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl ReplayProvider {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            name: "replay".to_string(),
            response: response.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl ReportProvider for ReplayProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_json(&self, prompt: &str, _schema: &Value) -> Result<String, ProviderError> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.response.clone())
    }
}
