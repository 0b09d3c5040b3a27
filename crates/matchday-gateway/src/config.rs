//! Gateway configuration

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use matchday_agent::providers::gemini::DEFAULT_MODEL;
use matchday_agent::{GeminiClient, ReportProvider};
use matchday_core::prompt::DEFAULT_LANGUAGE;

use crate::{GatewayError, Result, DEFAULT_HOST, DEFAULT_PORT};

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "MATCHDAY_MODEL";
pub const ENV_TEMPERATURE: &str = "MATCHDAY_TEMPERATURE";
pub const ENV_TIMEOUT_SECS: &str = "MATCHDAY_TIMEOUT_SECS";
pub const ENV_BASE_URL: &str = "MATCHDAY_BASE_URL";
pub const ENV_REPORT_LANGUAGE: &str = "MATCHDAY_REPORT_LANGUAGE";
pub const ENV_HOST: &str = "MATCHDAY_HOST";
pub const ENV_PORT: &str = "MATCHDAY_PORT";

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Language the model writes the report in
    pub report_language: String,

    /// Model provider configuration
    pub provider: ProviderSettings,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            report_language: DEFAULT_LANGUAGE.to_string(),
            provider: ProviderSettings::default(),
        }
    }
}

impl GatewayConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the report language
    pub fn with_report_language(mut self, language: impl Into<String>) -> Self {
        self.report_language = language.into();
        self
    }

    /// Set the Gemini API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.provider.api_key = Some(api_key.into());
        self
    }

    /// Set the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.provider.model = model.into();
        self
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| GatewayError::InvalidConfig(format!("{}:{}: {}", self.host, self.port, e)))
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file. The API key is not written.
    pub fn to_file(&self, path: &str) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().merge_env(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`.
    /// Blank values count as unset.
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(key) = var(ENV_API_KEY) {
            self.provider.api_key = Some(key);
        }
        if let Some(model) = var(ENV_MODEL) {
            self.provider.model = model;
        }
        if let Some(temperature) = var(ENV_TEMPERATURE) {
            self.provider.temperature = Some(parse_var(ENV_TEMPERATURE, &temperature)?);
        }
        if let Some(timeout) = var(ENV_TIMEOUT_SECS) {
            self.provider.timeout_secs = parse_var(ENV_TIMEOUT_SECS, &timeout)?;
        }
        if let Some(base_url) = var(ENV_BASE_URL) {
            self.provider.base_url = Some(base_url);
        }
        if let Some(language) = var(ENV_REPORT_LANGUAGE) {
            self.report_language = language;
        }
        if let Some(host) = var(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = var(ENV_PORT) {
            self.port = parse_var(ENV_PORT, &port)?;
        }

        Ok(self)
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| GatewayError::InvalidConfig(format!("{key}={value}: {e}")))
}

/// Model provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Gemini API key, never serialized
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Model name
    pub model: String,

    /// Sampling temperature, provider default when unset
    pub temperature: Option<f64>,

    /// HTTP timeout for one model call
    pub timeout_secs: u64,

    /// API base URL override
    pub base_url: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: None,
            timeout_secs: 120,
            base_url: None,
        }
    }
}

impl ProviderSettings {
    /// Build the Gemini provider, or `None` when no API key is configured
    pub fn build_provider(&self) -> Result<Option<Arc<dyn ReportProvider>>> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(None);
        };

        let mut client = GeminiClient::new(api_key, self.model.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .map_err(|e| GatewayError::InvalidConfig(e.to_string()))?;
        if let Some(temperature) = self.temperature {
            client = client.with_temperature(temperature);
        }
        if let Some(base_url) = &self.base_url {
            client = client.with_base_url(base_url.clone());
        }

        let provider: Arc<dyn ReportProvider> = Arc::new(client);
        Ok(Some(provider))
    }
}
