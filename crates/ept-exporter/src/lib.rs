mod config;
pub use config::{DEFAULT_ES_URL, DEFAULT_LISTEN_ADDRESS, DEFAULT_METRICS_PATH, ExporterConfig};

mod server;
pub use server::{router, serve};
