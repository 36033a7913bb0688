//! Subcommand implementations

pub mod init_db;
pub mod serve;

use blogpost_server::{Database, DbConfig, PoolSettings};

/// Database handle from an explicit URL, or from the environment on first use.
fn database(database_url: Option<String>, settings: PoolSettings) -> Database {
    match database_url {
        Some(url) => Database::new(DbConfig::from_url(url).with_pool(settings)),
        None => Database::from_env(settings),
    }
}
