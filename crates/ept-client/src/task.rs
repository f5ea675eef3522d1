use serde::{Deserialize, Deserializer};

/// One pending cluster-level operation as reported by Elasticsearch.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Whether the master is currently running this task.
    pub executing: bool,
    /// Priority label (`urgent`, `high`, `normal`, ...).
    pub priority: String,
    /// Name of the operation that queued the task.
    pub source: String,
}

impl Task {
    pub fn new(executing: bool, priority: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            executing,
            priority: priority.into(),
            source: source.into(),
        }
    }
}

/// Body of `GET /_cluster/pending_tasks`.
///
/// Fields other than `tasks` are ignored. A missing or `null` array decodes as empty.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct PendingTasks {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<Task>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Task>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Task>>::deserialize(deserializer)?.unwrap_or_default())
}
