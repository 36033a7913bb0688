//! Environment loading

use std::path::PathBuf;

use tracing::{debug, info};

/// Log the outcome of loading `.env` from the current directory.
///
/// Variables already set in the process environment win over the file; a
/// missing or unreadable file is not an error.
pub fn report_dotenv(result: dotenvy::Result<PathBuf>) {
    match result {
        Ok(path) => info!("Loaded configuration from {}", path.display()),
        Err(e) if e.not_found() => {
            debug!("No .env file found, using environment variables only")
        }
        Err(e) => debug!("Failed to load .env: {}", e),
    }
}
