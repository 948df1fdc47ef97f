//! sleuthd: interrogation analysis service.
//!
//! Serves the reasoning pipeline over HTTP and keeps the agent loop
//! running beside it. Both surfaces share one orchestrator; the rule
//! program is read once at startup and a missing file simply leaves
//! the service heuristic-only.

mod agent;
mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sleuth_runtime::{EngineRegistry, Orchestrator, DEFAULT_RULES_PATH};

#[derive(Parser, Debug)]
#[command(name = "sleuthd", version, about = "Interrogation analysis service")]
struct Args {
    /// Address to listen on. Loopback by default.
    #[arg(long, default_value = "127.0.0.1:7070")]
    listen: SocketAddr,

    /// Path to the rule program for the symbolic backend.
    #[arg(long, default_value = DEFAULT_RULES_PATH)]
    rules: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let registry = Arc::new(EngineRegistry::with_defaults());
    let orchestrator = Arc::new(Orchestrator::from_rules_path(registry, &args.rules));

    // Agent loop runs for the lifetime of the process.
    let _agent = agent::spawn(Arc::clone(&orchestrator));

    let app = routes::router(orchestrator);
    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    tracing::info!(addr = %args.listen, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
