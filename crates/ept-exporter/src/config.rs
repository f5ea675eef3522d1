use std::net::SocketAddr;

use clap::Parser;
use ept_observe::{LoggerConfig, LoggerFormat};

pub const DEFAULT_ES_URL: &str = "http://localhost:9200";
pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:9111";
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

/// Prometheus exporter for Elasticsearch pending cluster tasks.
///
/// Every flag can also be set through its environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "ept-exporter", version)]
pub struct ExporterConfig {
    /// Elasticsearch base URL.
    #[arg(long = "es.url", env = "ES_URL", default_value = DEFAULT_ES_URL)]
    pub es_url: String,

    /// Address to listen on for scrapes.
    #[arg(long = "web.listen-address", env = "WEB_LISTEN_ADDRESS", default_value = DEFAULT_LISTEN_ADDRESS)]
    pub listen_address: SocketAddr,

    /// Path under which to expose metrics.
    #[arg(
        long = "web.telemetry-path",
        env = "WEB_TELEMETRY_PATH",
        default_value = DEFAULT_METRICS_PATH,
        value_parser = parse_metrics_path
    )]
    pub metrics_path: String,

    /// Log filter directive (e.g. `info`, `ept_client=debug,info`).
    #[arg(long = "log.level", env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format: text, json or journald.
    #[arg(long = "log.format", env = "LOG_FORMAT", default_value = "text")]
    pub log_format: LoggerFormat,
}

impl ExporterConfig {
    pub fn logger(&self) -> LoggerConfig {
        LoggerConfig::new(self.log_format, self.log_level.clone())
    }
}

fn parse_metrics_path(raw: &str) -> Result<String, String> {
    if !raw.starts_with('/') {
        return Err(format!("telemetry path must start with '/': {raw}"));
    }
    if raw == "/" {
        return Err("telemetry path must not be '/'".to_string());
    }
    if raw.contains(['{', '}']) {
        return Err(format!("telemetry path must not contain '{{' or '}}': {raw}"));
    }
    if raw.split('/').any(|segment| segment.starts_with([':', '*'])) {
        return Err(format!(
            "telemetry path segments must not start with ':' or '*': {raw}"
        ));
    }
    Ok(raw.to_string())
}
