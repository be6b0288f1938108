use std::sync::Arc;

use anyhow::{anyhow, Context};
use tokio::net::TcpListener;
use tracing::info;

use crate::{api, config::ServeConfig, runner, Ledger};

/// Builds the ledger, applies the seed file if configured, and serves HTTP
/// until Ctrl-C. The ledger lives exactly as long as this call.
pub async fn serve(config: ServeConfig) -> anyhow::Result<()> {
    let ledger = Arc::new(Ledger::new());

    if let Some(seed_path) = &config.seed {
        let report = runner::seed(Arc::clone(&ledger), seed_path)
            .await
            .map_err(|err| anyhow!(err))
            .with_context(|| format!("failed to seed ledger from {}", seed_path.display()))?;
        info!(
            path = %seed_path.display(),
            applied = report.applied,
            rejected = report.rejected,
            "ledger seeded"
        );
    }

    let app = api::app(ledger, config.timeouts());

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!(addr = %listener.local_addr()?, env = ?config.env, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
