//! Match Simulator
//!
//! The whole pipeline for one fixture:
//! validate both teams → build prompt → request report → check report.
//! Nothing leaves the process until both teams pass validation.

use std::sync::Arc;

use matchday_core::{
    validate_fixture, validate_report, MatchReport, PromptBuilder, ReportSchema, Team,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::SimulationError;
use crate::providers::ReportProvider;
use crate::requester::ReportRequester;

#[derive(Debug, Clone)]
pub struct MatchSimulator {
    requester: ReportRequester,
    prompt_builder: PromptBuilder,
    schema: ReportSchema,
}

impl MatchSimulator {
    pub fn new(provider: Arc<dyn ReportProvider>) -> Self {
        Self {
            requester: ReportRequester::new(provider),
            prompt_builder: PromptBuilder::default(),
            schema: ReportSchema::match_report(),
        }
    }

    pub fn with_prompt_builder(mut self, prompt_builder: PromptBuilder) -> Self {
        self.prompt_builder = prompt_builder;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.requester.provider().name()
    }

    pub async fn simulate(&self, home: &Team, away: &Team) -> Result<MatchReport, SimulationError> {
        let simulation_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "simulation",
            %simulation_id,
            home = %home.name,
            away = %away.name
        );

        async move {
            validate_fixture(home, away)?;

            let prompt = self.prompt_builder.build(home, away);
            tracing::info!(provider = self.provider_name(), "requesting match report");

            let report = self
                .requester
                .request_report(&prompt, &self.schema)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "report request failed");
                    SimulationError::from(e)
                })?;

            validate_report(&report).map_err(|e| {
                tracing::error!(error = %e, "report failed validation");
                SimulationError::from(e)
            })?;

            tracing::info!(
                score = %format!("{}-{}", report.score.home, report.score.away),
                goals = report.goals.len(),
                "simulation complete"
            );
            Ok::<_, SimulationError>(report)
        }
        .instrument(span)
        .await
    }
}
