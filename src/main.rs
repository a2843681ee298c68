//! Authentication API front-end.
//!
//! ```text
//!     Client ──▶ TCP listener ──▶ Axum router ──┬─▶ /              landing
//!                                               ├─▶ /api           API metadata
//!                                               ├─▶ /api/auth      endpoint map
//!                                               ├─▶ /package-form  package form
//!                                               └─▶ fallback       404
//!
//!     every response ──▶ CORS headers ──▶ Client
//! ```
//!
//! Pages render HTML by default and JSON when requested with
//! `?format=json`.

use std::path::PathBuf;

use clap::Parser;

use auth_frontend::config::{resolve_config, ConfigOverrides, SESSION_SECRET_ENV};
use auth_frontend::lifecycle::startup;
use auth_frontend::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "auth-frontend")]
#[command(about = "Front-end pages for the Authentication API", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The environment is consulted exactly once, here.
    let overrides = ConfigOverrides {
        session_secret: std::env::var(SESSION_SECRET_ENV).ok(),
        bind_address: cli.bind,
    };
    let config = resolve_config(cli.config.as_deref(), overrides)?;

    init_logging(&config.observability.log_level);
    tracing::info!("auth-frontend v{} starting", env!("CARGO_PKG_VERSION"));

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
