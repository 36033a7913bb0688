//! HTTP server command
//!
//! The database is not contacted at startup: a missing credential or an
//! unreachable server shows up as a 500 on the requests that need it.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use blogpost_server::{run_server, PoolSettings, ServerConfig};
use clap::Parser;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BLOGPOST_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Per-request deadline in seconds
    #[arg(long, env = "BLOGPOST_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Maximum number of pooled database connections
    #[arg(long, env = "BLOGPOST_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Database URL (overrides DB_USERNAME/DB_PASSWORD/DB_NAME)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let settings = PoolSettings {
        max_connections: args.max_connections,
        ..PoolSettings::default()
    };
    let db = super::database(args.database_url, settings);

    let config = ServerConfig {
        bind_addr: args.bind,
        request_timeout: Duration::from_secs(args.timeout),
    };

    tracing::info!("Starting blogpost server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(db, config).await.context("Server error")?;

    Ok(())
}
