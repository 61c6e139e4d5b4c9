//! sustaind — the Sustain API daemon.
//!
//! Single binary that assembles the serving side:
//! - Record store (redb)
//! - Category REST API
//!
//! # Usage
//!
//! ```text
//! sustaind serve --port 3001 --data-dir /var/lib/sustain
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

/// Default log filter. Targets are crate names with underscores.
const DEFAULT_LOG_FILTER: &str = "info,sustaind=debug,sustain_store=debug,sustain_api=debug";

#[derive(Parser)]
#[command(name = "sustaind", about = "Sustain initiative catalog daemon")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the category API, bound to loopback.
    Serve {
        /// Port to listen on.
        #[arg(long, env = "SUSTAIN_PORT", default_value = "3001")]
        port: u16,

        /// Data directory for the record store.
        #[arg(long, default_value = "/var/lib/sustain")]
        data_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, data_dir } => run_serve(port, data_dir).await,
    }
}

async fn run_serve(port: u16, data_dir: PathBuf) -> anyhow::Result<()> {
    info!("Sustain daemon starting");

    // Ensure data directory exists.
    std::fs::create_dir_all(&data_dir)?;
    let db_path = data_dir.join("sustain.redb");

    let store = sustain_store::Store::open(&db_path)?;
    let records = store.count()?;
    info!(path = ?db_path, records, "record store opened");

    let router = sustain_api::build_router(store);

    // Loopback only; the site talks to the API on the same host.
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!(%addr, "API server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Graceful shutdown on Ctrl-C.
    let server = axum::serve(listener, router).with_graceful_shutdown(async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
        info!("shutdown signal received");
    });

    server.await?;

    info!("Sustain daemon stopped");
    Ok(())
}
