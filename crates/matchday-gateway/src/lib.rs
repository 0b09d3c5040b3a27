//! Matchday Gateway - HTTP surface for match simulation
//!
//! # Routes
//!
//! ```text
//! POST    /simulate-match        {homeTeam, awayTeam} → MatchReport JSON
//! POST    /simulate-match/page   {homeTeam, awayTeam} → HTML match sheet
//! OPTIONS /simulate-match[/page] CORS preflight, 200 empty body
//! GET     /formations            formation codes, slots and roster templates
//! GET     /health                status and version
//! ```
//!
//! Input problems answer 400 `{error}`, other methods 405 `{error}`, and
//! anything that goes wrong after the input stage 500 `{error, message}`.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;

pub use client::{ClientError, GatewayClient};
pub use config::{GatewayConfig, ProviderSettings};
pub use error::{GatewayError, Result};
pub use gateway::{Gateway, GatewayState};

/// Gateway version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8787;

/// Default host
pub const DEFAULT_HOST: &str = "127.0.0.1";
