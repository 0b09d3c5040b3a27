//! Matchday Gateway Binary
//!
//! # Usage
//! ```bash
//! matchday-gateway [--port 8787] [--host 127.0.0.1] [--config gateway.json] [--verbose]
//! ```

use anyhow::Context;
use clap::Parser;
use matchday_gateway::{Gateway, GatewayConfig};
use tracing_subscriber::EnvFilter;

/// Matchday Gateway - football match simulation over HTTP
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides MATCHDAY_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides MATCHDAY_HOST)
    #[arg(long)]
    host: Option<String>,

    /// JSON configuration file, environment variables still apply on top
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dotenvy::dotenv().ok();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    let base = match &args.config {
        Some(path) => GatewayConfig::from_file(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => GatewayConfig::default(),
    };
    let mut config = base
        .merge_env(|key| std::env::var(key).ok())
        .context("invalid environment configuration")?;
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }

    print_banner(&config);

    let gateway = Gateway::new(config)?;
    gateway.start().await?;

    Ok(())
}

fn print_banner(config: &GatewayConfig) {
    println!();
    println!("Matchday Gateway v{}", matchday_gateway::VERSION);
    println!();
    println!("   Listening on http://{}:{}", config.host, config.port);
    println!("   Model        {}", config.provider.model);
    println!("   Language     {}", config.report_language);
    println!();
    println!("   POST /simulate-match       match report as JSON");
    println!("   POST /simulate-match/page  match report as HTML");
    println!("   GET  /formations           formation templates");
    println!("   GET  /health               health check");
    println!();
    println!("Press Ctrl+C to stop the gateway");
    println!();
}
