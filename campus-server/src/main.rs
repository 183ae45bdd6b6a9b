//! Campus CRUD API server.
//!
//! Serves the menu item review, dining commons menu item, student
//! organization and article endpoints over HTTP.
//!
//! Usage:
//!   campus-server --port 8080 --principals principals.json [--database campus.db]
//!
//! Without `--database` every record lives in memory and is lost on exit.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use campus_server::{Stores, TokenResolver, build_router};
use campus_storage::SqliteStore;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "campus-server")]
#[command(about = "Campus CRUD API server")]
struct Args {
    /// Address to bind the HTTP listener to
    #[arg(short, long, env = "CAMPUS_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// HTTP port
    #[arg(short, long, env = "CAMPUS_PORT", default_value = "8080")]
    port: u16,

    /// SQLite database file (in-memory stores when omitted)
    #[arg(short, long, env = "CAMPUS_DATABASE")]
    database: Option<PathBuf>,

    /// JSON token table mapping bearer tokens to principals
    #[arg(long, env = "CAMPUS_PRINCIPALS")]
    principals: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level.as_str())),
        )
        .with_target(false)
        .compact()
        .init();

    info!("Campus API starting...");

    let stores = match &args.database {
        Some(path) => {
            info!("Opening database at {:?}", path);
            let store = SqliteStore::open(path)
                .with_context(|| format!("Failed to open database {}", path.display()))?;
            Stores::sqlite(store)
        }
        None => {
            warn!("No database configured; records are kept in memory");
            Stores::in_memory()
        }
    };

    let resolver = match &args.principals {
        Some(path) => load_principals(path)?,
        None => TokenResolver::new(),
    };
    if resolver.is_empty() {
        warn!("No principals configured; every request is anonymous");
    } else {
        info!("Loaded {} principal token(s)", resolver.len());
    }

    let app = build_router(stores, Arc::new(resolver));

    let listener = TcpListener::bind((args.bind.as_str(), args.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", args.bind, args.port))?;
    info!("HTTP API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Campus API stopped");
    Ok(())
}

fn load_principals(path: &Path) -> Result<TokenResolver> {
    info!("Loading principals from {:?}", path);
    let text = std::fs::read_to_string(path).context("Failed to read principals file")?;
    TokenResolver::from_json(&text).context("Failed to parse principals file")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
