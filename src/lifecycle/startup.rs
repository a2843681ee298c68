//! Ordered startup: warn about config, start metrics, bind, serve.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::{FrontendConfig, SESSION_SECRET_ENV};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

/// Startup warning for a config still signing sessions with the fallback
/// secret, or `None` when a real secret was supplied.
pub fn secret_warning(config: &FrontendConfig) -> Option<String> {
    config.session.uses_fallback_secret().then(|| {
        format!(
            "No session secret configured, using the built-in fallback; \
             set {SESSION_SECRET_ENV} before exposing this server"
        )
    })
}

/// Run the front-end until a termination signal arrives.
pub async fn run(config: FrontendConfig) -> Result<(), Box<dyn std::error::Error>> {
    let server = HttpServer::new(config);
    let config = server.config();

    if let Some(warning) = secret_warning(config) {
        tracing::warn!("{warning}");
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        log_level = %config.observability.log_level,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::forward_signals(&shutdown).await;
    });

    server.run(listener, server_shutdown).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve_config, ConfigOverrides};

    #[test]
    fn warns_when_secret_falls_back() {
        let config = resolve_config(None, ConfigOverrides::default()).unwrap();
        let warning = secret_warning(&config).unwrap();
        assert!(warning.contains(SESSION_SECRET_ENV));
    }

    #[test]
    fn quiet_when_secret_supplied() {
        let overrides = ConfigOverrides {
            session_secret: Some("a-real-secret".into()),
            ..Default::default()
        };
        let config = resolve_config(None, overrides).unwrap();
        assert_eq!(secret_warning(&config), None);
    }
}
