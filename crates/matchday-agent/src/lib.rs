//! Matchday Agent - model providers and the simulation pipeline
//!
//! This crate is the only part of Matchday that talks to a generative model.
//!
//! # Architecture
//!
//! ```text
//!   Team + Team
//!       │
//!       ▼
//!  MatchSimulator ── validate_fixture ──► ValidationError (client input)
//!       │
//!       ▼ prompt + ReportSchema
//!  ReportRequester ── ReportProvider (Gemini, Replay) ──► raw JSON text
//!       │
//!       ▼ schema parse + validate_report
//!   MatchReport                    everything else ──► SimulationError::Failed
//! ```

pub mod error;
pub mod providers;
pub mod requester;
pub mod simulator;

pub use error::{ProviderError, RequestError, SimulationError};
pub use providers::{GeminiClient, ReplayProvider, ReportProvider};
pub use requester::ReportRequester;
pub use simulator::MatchSimulator;
