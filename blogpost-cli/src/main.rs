//! blogpost CLI - runs the blog post HTTP server
//!
//! - `serve`: start the HTTP API
//! - `init-db`: create the posts table and exit
//!
//! Database credentials come from `DB_USERNAME`, `DB_PASSWORD` and
//! `DB_NAME` (or `DATABASE_URL`), read from the environment after `.env`
//! in the working directory has been loaded.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "blogpost",
    author,
    version,
    about = "HTTP API for creating, listing, updating and deleting blog posts"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the posts table if needed, then exit
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so `.env` can supply the BLOGPOST_* flag fallbacks
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    config::report_dotenv(dotenv);

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await?,
        Commands::InitDb(args) => commands::init_db::run_init_db(args).await?,
    }

    Ok(())
}
