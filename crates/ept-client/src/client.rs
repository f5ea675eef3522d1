use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::errors::ClientError;
use crate::task::{PendingTasks, Task};

/// Path appended to the configured base URL.
pub const PENDING_TASKS_PATH: &str = "/_cluster/pending_tasks";

/// Source of pending cluster tasks.
///
/// Every call is an independent fetch; implementations keep no state between calls.
#[async_trait]
pub trait TasksClient: Send + Sync + 'static {
    /// Fetch the current list of pending tasks.
    async fn pending_tasks(&self) -> Result<Vec<Task>, ClientError>;
}

/// [`TasksClient`] talking to a live cluster over HTTP.
///
/// Issues a single `GET` per call with the transport's default timeouts and no retries.
#[derive(Clone, Debug)]
pub struct HttpTasksClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTasksClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PENDING_TASKS_PATH)
    }
}

#[async_trait]
impl TasksClient for HttpTasksClient {
    async fn pending_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let url = self.endpoint();
        debug!(%url, "querying pending tasks");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::Status(status));
        }

        let body = response.bytes().await.map_err(ClientError::Body)?;
        debug!(body = %String::from_utf8_lossy(&body), "pending tasks response");

        let decoded: PendingTasks = serde_json::from_slice(&body)?;
        Ok(decoded.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_fixed_path() {
        let client = HttpTasksClient::new("http://localhost:9200");
        assert_eq!(client.endpoint(), "http://localhost:9200/_cluster/pending_tasks");
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let client = HttpTasksClient::new("http://es.local:9200/");
        assert_eq!(client.base_url(), "http://es.local:9200");
        assert_eq!(client.endpoint(), "http://es.local:9200/_cluster/pending_tasks");
    }
}
