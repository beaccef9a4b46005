use anyhow::Context as _;
use axum::Extension;
use clap::Parser as _;
use featstore_metadata::api::{self, ApiState};
use featstore_metadata::config::{ProxyBackend, ServiceConfig};
use featstore_metadata::proxy::{InMemoryProxy, ProxyClient};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = ServiceConfig::parse();
    init_tracing(cfg.log_json);

    let proxy: Arc<dyn ProxyClient> = match cfg.proxy {
        ProxyBackend::Memory => Arc::new(InMemoryProxy::new()),
    };
    let state = Arc::new(ApiState { proxy });
    let app = api::router().layer(Extension(state));

    let listener = tokio::net::TcpListener::bind(cfg.bind)
        .await
        .with_context(|| format!("bind {}", cfg.bind))?;
    tracing::info!(addr = %cfg.bind, "metadata service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http")?;
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
