//! Client for the Elasticsearch `_cluster/pending_tasks` endpoint.
//!
//! [`TasksClient`] is the seam the collector depends on; [`HttpTasksClient`] is the
//! real implementation backed by `reqwest`.

mod client;
pub use client::{HttpTasksClient, PENDING_TASKS_PATH, TasksClient};

mod errors;
pub use errors::{ClientError, Phase};

mod task;
pub use task::{PendingTasks, Task};
