use thiserror::Error;
use tracing_subscriber::util::TryInitError;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log format: {0} (expected: text|json|journald)")]
    InvalidFormat(String),
    #[error("journald logging is not supported on this platform or the feature is disabled")]
    JournaldNotSupported,
    #[error("journald connection failed: {0}")]
    Journald(#[source] std::io::Error),
    #[error("global logger already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
    #[error("invalid log level directive: {0}")]
    InvalidLogLevel(String),
}
