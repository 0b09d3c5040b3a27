//! `matchday simulate` - run one fixture and render the report.
//!
//! The report comes from one of three places: a running gateway
//! (`--endpoint`), a saved model response (`--replay`), or Gemini directly
//! using the same environment variables as the gateway.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use matchday_agent::{MatchSimulator, ReplayProvider, ReportProvider};
use matchday_core::{MatchReport, MatchSheet, PromptBuilder, Team};
use matchday_gateway::{GatewayClient, GatewayConfig, GatewayError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

/// Options for the `matchday simulate` command.
#[derive(Debug)]
pub struct SimulateOptions {
    pub home: PathBuf,
    pub away: PathBuf,
    pub endpoint: Option<String>,
    pub replay: Option<PathBuf>,
    pub language: Option<String>,
    pub format: OutputFormat,
}

/// Simulate the fixture and return the rendered output
pub async fn run(opts: SimulateOptions) -> Result<String> {
    let home = load_team(&opts.home)?;
    let away = load_team(&opts.away)?;

    if let Some(endpoint) = &opts.endpoint {
        let client = GatewayClient::new(endpoint.clone());
        tracing::info!(endpoint = client.endpoint(), "simulating through gateway");
        if opts.format == OutputFormat::Html {
            return Ok(client.simulate_page(&home, &away).await?);
        }
        let report = client.simulate(&home, &away).await?;
        return render(&report, &home, &away, opts.format);
    }

    let provider: Arc<dyn ReportProvider> = match &opts.replay {
        Some(path) => {
            let saved = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Arc::new(ReplayProvider::new(saved))
        }
        None => {
            let config = GatewayConfig::from_env()?;
            config
                .provider
                .build_provider()?
                .ok_or_else(GatewayError::missing_api_key)?
        }
    };

    let mut prompt_builder = PromptBuilder::new();
    if let Some(language) = &opts.language {
        prompt_builder = prompt_builder.with_language(language.clone());
    }

    let simulator = MatchSimulator::new(provider).with_prompt_builder(prompt_builder);
    let report = simulator.simulate(&home, &away).await?;
    render(&report, &home, &away, opts.format)
}

fn load_team(path: &Path) -> Result<Team> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("{} is not a team file", path.display()))
}

pub fn render(report: &MatchReport, home: &Team, away: &Team, format: OutputFormat) -> Result<String> {
    let sheet = MatchSheet::new(report, home, away);
    Ok(match format {
        OutputFormat::Text => sheet.to_text(),
        OutputFormat::Html => sheet.to_html(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    })
}
