//! MCP Server Entry Point
//!
//! This is the main entry point for the orders MCP server. It initializes
//! logging, loads configuration, connects to the database, and serves the
//! protocol over stdio until the session closes or the process is
//! interrupted.

use std::sync::Arc;

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use pedidos_mcp_server::core::{Config, ConnectionManager, OrdersServer};
use pedidos_mcp_server::core::transport::StdioTransport;
use pedidos_mcp_server::domains::orders::{OrderRepository, PgOrderRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging (stderr only - stdout carries protocol messages)
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // One connection for the process lifetime; failure here is fatal.
    let db = Arc::new(ConnectionManager::new());
    if let Err(e) = db.connect(&config.database).await {
        error!("Failed to connect to database: {}", e);
        return Err(e.into());
    }
    info!("Database connection established");

    let repo: Arc<dyn OrderRepository> = Arc::new(PgOrderRepository::new(
        db.clone(),
        config.database.query_timeout(),
    ));
    let server = OrdersServer::new(config, repo);

    info!("Server initialized");

    let result = tokio::select! {
        res = StdioTransport::run(server) => res,
        _ = tokio::signal::ctrl_c() => {
            info!("Server interrupted by user");
            Ok(())
        }
    };

    // Cleanup runs on both the clean and the error path.
    db.close().await;
    info!("Server shutting down");

    result?;
    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
