use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("invalid metric descriptor: {0}")]
    Descriptor(#[from] prometheus::Error),
}
