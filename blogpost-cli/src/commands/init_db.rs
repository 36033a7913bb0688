//! Schema bootstrap command

use anyhow::{Context, Result};
use blogpost_server::PoolSettings;
use clap::Parser;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Database URL (overrides DB_USERNAME/DB_PASSWORD/DB_NAME)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Open one connection, which creates the posts table if it is missing.
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let db = super::database(
        args.database_url,
        PoolSettings {
            max_connections: 1,
            ..PoolSettings::default()
        },
    );

    let conn = db.open().await.context("Failed to initialize database")?;
    drop(conn);
    db.close().await;

    tracing::info!("Database ready");
    Ok(())
}
