//! Main Gateway implementation
//!
//! HTTP surface for match simulation. Every response carries permissive CORS
//! headers so the browser UI can be served from anywhere.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use matchday_agent::{MatchSimulator, ReportProvider};
use matchday_core::{formations, MatchReport, MatchSheet, PromptBuilder, SimulateMatchRequest, Team};

use crate::config::GatewayConfig;
use crate::{GatewayError, Result};

/// Gateway state shared across handlers
#[derive(Clone)]
pub struct GatewayState {
    pub config: GatewayConfig,
    simulator: Option<MatchSimulator>,
}

impl GatewayState {
    /// Build state from configuration. Without an API key the gateway still
    /// starts; simulation requests then fail with a 500.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let provider = config.provider.build_provider()?;
        Ok(Self::assemble(config, provider))
    }

    /// Build state around an explicit provider
    pub fn with_provider(config: GatewayConfig, provider: Arc<dyn ReportProvider>) -> Self {
        Self::assemble(config, Some(provider))
    }

    fn assemble(config: GatewayConfig, provider: Option<Arc<dyn ReportProvider>>) -> Self {
        let prompt_builder = PromptBuilder::new().with_language(config.report_language.clone());
        let simulator =
            provider.map(|p| MatchSimulator::new(p).with_prompt_builder(prompt_builder));
        Self { config, simulator }
    }

    pub fn simulator(&self) -> Result<&MatchSimulator> {
        self.simulator.as_ref().ok_or_else(GatewayError::missing_api_key)
    }

    async fn simulate(&self, body: &[u8]) -> Result<(MatchReport, Team, Team)> {
        let simulator = self.simulator()?;
        let (home, away) = parse_request(body)?;
        let report = simulator.simulate(&home, &away).await?;
        Ok((report, home, away))
    }
}

/// Decode a `{homeTeam, awayTeam}` body. Both teams must be present.
pub fn parse_request(body: &[u8]) -> Result<(Team, Team)> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(GatewayError::BadRequest("Request body is required".to_string()));
    }

    let request: SimulateMatchRequest = serde_json::from_slice(body)
        .map_err(|e| GatewayError::BadRequest(format!("Invalid request body: {e}")))?;

    match (request.home_team, request.away_team) {
        (Some(home), Some(away)) => Ok((home, away)),
        _ => Err(GatewayError::BadRequest(
            "homeTeam and awayTeam are required".to_string(),
        )),
    }
}

/// Main Gateway
pub struct Gateway {
    state: Arc<GatewayState>,
}

impl Gateway {
    /// Create a new gateway with configuration
    pub fn new(config: GatewayConfig) -> Result<Self> {
        Ok(Self::with_state(GatewayState::new(config)?))
    }

    pub fn with_state(state: GatewayState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Get gateway state
    pub fn state(&self) -> Arc<GatewayState> {
        self.state.clone()
    }

    /// Build the Axum router
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/formations", get(Self::handle_formations))
            .route(
                "/simulate-match",
                post(Self::handle_simulate)
                    .options(Self::handle_preflight)
                    .fallback(Self::handle_method_not_allowed),
            )
            .route(
                "/simulate-match/page",
                post(Self::handle_simulate_page)
                    .options(Self::handle_preflight)
                    .fallback(Self::handle_method_not_allowed),
            )
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_headers([header::CONTENT_TYPE])
                    .allow_methods([Method::POST, Method::OPTIONS]),
            )
            .layer(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("POST, OPTIONS"),
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the gateway server
    pub async fn start(&self) -> Result<()> {
        let addr = self.state.config.socket_addr()?;
        let router = self.build_router();

        tracing::info!("Matchday gateway starting on {}", addr);
        if self.state.simulator.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set, simulations will fail");
        }

        let listener = tokio::net::TcpListener::bind(addr).await?;

        axum::serve(listener, router)
            .await
            .map_err(|e| GatewayError::Internal(e.to_string()))?;

        Ok(())
    }

    // HTTP handlers

    async fn handle_health(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
        Json(json!({
            "status": "healthy",
            "version": crate::VERSION,
            "model": state.config.provider.model,
            "configured": state.simulator.is_some(),
        }))
    }

    async fn handle_formations() -> impl IntoResponse {
        let list: Vec<_> = formations()
            .iter()
            .map(|f| {
                json!({
                    "code": f.code,
                    "slots": f.slots,
                    "template": f.template(),
                })
            })
            .collect();
        Json(list)
    }

    async fn handle_preflight() -> StatusCode {
        StatusCode::OK
    }

    async fn handle_method_not_allowed() -> GatewayError {
        GatewayError::MethodNotAllowed
    }

    async fn handle_simulate(
        State(state): State<Arc<GatewayState>>,
        body: Bytes,
    ) -> Result<Json<MatchReport>> {
        let (report, _, _) = state.simulate(&body).await?;
        Ok(Json(report))
    }

    async fn handle_simulate_page(
        State(state): State<Arc<GatewayState>>,
        body: Bytes,
    ) -> Result<Html<String>> {
        let (report, home, away) = state.simulate(&body).await?;
        Ok(Html(MatchSheet::new(&report, &home, &away).to_html()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_creation() {
        let gateway = Gateway::new(GatewayConfig::default()).unwrap();
        assert!(gateway.state().config.port > 0);
        assert!(gateway.state().simulator().is_err());
    }

    #[test]
    fn test_gateway_with_key() {
        let gateway = Gateway::new(GatewayConfig::default().with_api_key("k")).unwrap();
        assert!(gateway.state().simulator().is_ok());
    }

    #[test]
    fn test_parse_request_missing_body() {
        for body in ["", "  \n"] {
            let err = parse_request(body.as_bytes()).unwrap_err();
            assert_eq!(err.to_string(), "Request body is required");
        }
    }

    #[test]
    fn test_parse_request_bad_json() {
        let err = parse_request(b"{not json").unwrap_err();
        assert!(matches!(err, GatewayError::BadRequest(_)));
        assert!(err.to_string().starts_with("Invalid request body"));
    }

    #[test]
    fn test_parse_request_missing_team() {
        let err = parse_request(br#"{"homeTeam": {"name": "A"}}"#).unwrap_err();
        assert_eq!(err.to_string(), "homeTeam and awayTeam are required");
    }

    #[test]
    fn test_parse_request_defaults_team_fields() {
        let (home, away) = parse_request(br#"{"homeTeam": {"name": "A"}, "awayTeam": {}}"#).unwrap();
        assert_eq!(home.name, "A");
        assert!(home.players.is_empty());
        assert!(away.name.is_empty());
    }
}
