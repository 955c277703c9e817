//! todoctl - todo CRUD HTTP API
//!
//! Opens (or creates) the SQLite database, then serves:
//! - `GET /todos/` with search_q / priority / status / category filters
//! - `GET /todos/{id}/`, `GET /agenda/?date=`
//! - `POST /todos/`, `PUT /todos/{id}/`, `DELETE /todos/{id}/`

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use todoctl_server::{create_pool_with_options, run_server, ServerConfig};

mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "todoctl",
    author,
    version,
    about = "Todo CRUD HTTP API backed by SQLite"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TODOCTL_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Path to the SQLite database file (created if missing)
    #[arg(
        long,
        short = 'd',
        env = "TODOCTL_DATABASE",
        default_value = "todoApplication.db"
    )]
    database: PathBuf,

    /// Maximum pooled database connections
    #[arg(long, env = "TODOCTL_MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "TODOCTL_CORS_PERMISSIVE")]
    cors_permissive: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_sources = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    config::log_sources(&env_sources);

    if let Err(err) = run(cli).await {
        tracing::error!("{:#}", err);
        return Err(err);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    tracing::info!(database = %cli.database.display(), "Opening database");
    let pool = create_pool_with_options(&cli.database, cli.max_connections)
        .await
        .with_context(|| format!("Database error at {}", cli.database.display()))?;

    let config = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
