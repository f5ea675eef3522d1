//! Prometheus collector for Elasticsearch pending cluster tasks.
//!
//! Every call to [`PendingTasksCollector::collect`] runs one full collection cycle:
//! fetch the pending tasks, group them by `(source, priority)` and build fresh metric
//! families. Nothing is cached between cycles.
//!
//! ## Metrics
//! - `elasticsearch_pending_tasks_up` - Gauge, `1` when the last fetch succeeded
//! - `elasticsearch_pending_tasks_scrape_duration_seconds` - Gauge
//! - `elasticsearch_pending_tasks_total{source, priority}` - Gauge, pending tasks per group
//!
//! ## HTTP Server
//! This crate does NOT serve `/metrics`. Feed the result of `collect` to [`encode_text`]:
//!
//! ```rust,ignore
//! let families = collector.collect().await;
//! let body = ept_collector::encode_text(&families)?;
//! ```

mod collector;
pub use collector::{NAMESPACE, PendingTasksCollector, SUBSYSTEM};

mod errors;
pub use errors::CollectorError;

mod group;
pub use group::{TaskGroup, group_tasks};

mod render;
pub use render::{CONTENT_TYPE, encode_text};

pub use prometheus::proto::MetricFamily;
