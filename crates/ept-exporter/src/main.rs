use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use ept_client::HttpTasksClient;
use ept_collector::PendingTasksCollector;
use ept_exporter::{ExporterConfig, router, serve};
use ept_observe::logger_init;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ExporterConfig::parse();

    logger_init(&config.logger()).context("failed to initialize logger")?;
    info!(
        es_url = %config.es_url,
        listen_address = %config.listen_address,
        metrics_path = %config.metrics_path,
        "starting elasticsearch pending tasks exporter"
    );

    let client = HttpTasksClient::new(config.es_url.as_str());
    let collector = Arc::new(PendingTasksCollector::new(client)?);
    let app = router(collector, &config.metrics_path);

    let listener = TcpListener::bind(config.listen_address)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_address))?;

    serve(listener, app, shutdown_signal()).await?;
    info!("exporter stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
