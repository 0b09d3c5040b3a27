//! Report Requester
//!
//! One call to the provider, one parse. No retries, no streaming.

use std::sync::Arc;

use matchday_core::{MatchReport, ReportSchema};

use crate::error::RequestError;
use crate::providers::ReportProvider;

/// Characters of raw model output written to the debug log
const PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone)]
pub struct ReportRequester {
    provider: Arc<dyn ReportProvider>,
}

impl ReportRequester {
    pub fn new(provider: Arc<dyn ReportProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn ReportProvider> {
        &self.provider
    }

    /// Ask the model for a report constrained by `schema` and parse the reply
    pub async fn request_report(
        &self,
        prompt: &str,
        schema: &ReportSchema,
    ) -> Result<MatchReport, RequestError> {
        let request_schema = schema.to_request_schema();
        let text = self.provider.generate_json(prompt, &request_schema).await?;

        if text.trim().is_empty() {
            return Err(RequestError::EmptyResponse);
        }

        tracing::debug!(
            provider = self.provider.name(),
            response_len = text.len(),
            preview = %preview(&text),
            "model response received"
        );

        Ok(schema.parse(&text)?)
    }
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
