//! Cake pricing server binary.

use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cake_pricing::api::{AppState, create_router};
use cake_pricing::config::{ConfigLoader, RulesStore, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    info!(?config, "Starting cake pricing server");

    let rules = ConfigLoader::load(&config.rules_path).with_context(|| {
        format!(
            "failed to load pricing rules from {}",
            config.rules_path.display()
        )
    })?;
    info!(version = %rules.version, effective_date = %rules.effective_date, "Pricing rules loaded");

    let store = Arc::new(RulesStore::new(rules));
    spawn_reload_on_hangup(Arc::clone(&store), config.clone());

    let app = create_router(AppState::with_store(store)).layer(TraceLayer::new_for_http());

    let addr = config.socket_addr().context("invalid listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}

/// Reloads the rules file whenever the process receives SIGHUP.
#[cfg(unix)]
fn spawn_reload_on_hangup(store: Arc<RulesStore>, config: ServerConfig) {
    use tokio::signal::unix::{SignalKind, signal};

    tokio::spawn(async move {
        let mut hangups = match signal(SignalKind::hangup()) {
            Ok(stream) => stream,
            Err(err) => {
                warn!(error = %err, "SIGHUP reload disabled");
                return;
            }
        };

        while hangups.recv().await.is_some() {
            if let Err(err) = store.reload_from(&config.rules_path) {
                warn!(
                    error = %err,
                    path = %config.rules_path.display(),
                    "Pricing rules reload failed; keeping current rules"
                );
            }
        }
    });
}

#[cfg(not(unix))]
fn spawn_reload_on_hangup(_store: Arc<RulesStore>, _config: ServerConfig) {}
