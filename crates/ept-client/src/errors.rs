use reqwest::StatusCode;
use thiserror::Error;

/// Stage of the fetch that produced a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Request,
    Parse,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("failed to get pending tasks: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to get pending tasks: {0}")]
    Status(StatusCode),

    #[error("failed to parse pending tasks: {0}")]
    Body(#[source] reqwest::Error),

    #[error("failed to parse pending tasks: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn phase(&self) -> Phase {
        match self {
            ClientError::Request(_) | ClientError::Status(_) => Phase::Request,
            ClientError::Body(_) | ClientError::Decode(_) => Phase::Parse,
        }
    }
}
