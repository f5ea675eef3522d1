use std::time::Instant;

use ept_client::{Task, TasksClient};
use prometheus::{
    Gauge, GaugeVec, Opts,
    core::{Collector, Desc, Describer},
    proto::MetricFamily,
};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::errors::CollectorError;
use crate::group::group_tasks;

pub const NAMESPACE: &str = "elasticsearch";
pub const SUBSYSTEM: &str = "pending_tasks";

const SOURCE_LABEL: &str = "source";
const PRIORITY_LABEL: &str = "priority";

/// Collects pending-task metrics from a [`TasksClient`] on demand.
///
/// Cycles are serialized: a `collect` that arrives while another is running waits
/// for it to finish and then performs its own fetch.
pub struct PendingTasksCollector<C> {
    client: C,
    cycle: Mutex<()>,

    // Unlabeled gauges; both are overwritten by every cycle before being read.
    up: Gauge,
    scrape_duration: Gauge,
    // `total` series are rebuilt per cycle from these options.
    total: Opts,
    descs: Vec<Desc>,
}

impl<C> PendingTasksCollector<C>
where
    C: TasksClient,
{
    pub fn new(client: C) -> Result<Self, CollectorError> {
        let up = Gauge::with_opts(
            Opts::new("up", "API is responding")
                .namespace(NAMESPACE)
                .subsystem(SUBSYSTEM),
        )?;
        let scrape_duration = Gauge::with_opts(
            Opts::new("scrape_duration_seconds", "Scrape duration in seconds")
                .namespace(NAMESPACE)
                .subsystem(SUBSYSTEM),
        )?;
        let total = Opts::new("total", "Total pending tasks by source and priority")
            .namespace(NAMESPACE)
            .subsystem(SUBSYSTEM)
            .variable_labels(vec![SOURCE_LABEL.to_string(), PRIORITY_LABEL.to_string()]);

        let mut descs: Vec<Desc> = up.desc().into_iter().cloned().collect();
        descs.extend(scrape_duration.desc().into_iter().cloned());
        descs.push(total.describe()?);

        Ok(Self {
            client,
            cycle: Mutex::new(()),
            up,
            scrape_duration,
            total,
            descs,
        })
    }

    /// Descriptors of every metric this collector can emit.
    pub fn describe(&self) -> Vec<&Desc> {
        self.descs.iter().collect()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run one collection cycle.
    ///
    /// Always yields `up` and `scrape_duration_seconds`. Upstream failures are logged
    /// and reported as `up 0` without any `total` samples; they never fail the scrape.
    pub async fn collect(&self) -> Vec<MetricFamily> {
        let _cycle = self.cycle.lock().await;
        let start = Instant::now();

        info!("collecting pending tasks metrics");
        let totals = match self.client.pending_tasks().await {
            Ok(tasks) => {
                debug!(tasks = tasks.len(), "collected pending tasks");
                match self.totals(&tasks) {
                    Ok(totals) => Some(totals),
                    Err(e) => {
                        error!(error = %e, "failed to build pending tasks series");
                        None
                    }
                }
            }
            Err(e) => {
                error!(error = %e, phase = ?e.phase(), "failed to scrape elasticsearch");
                None
            }
        };

        // The inner `None` means no tasks, so no `total` family at all.
        self.up.set(if totals.is_some() { 1.0 } else { 0.0 });
        let mut families: Vec<MetricFamily> = totals
            .flatten()
            .map(|totals| totals.collect())
            .unwrap_or_default();

        self.scrape_duration.set(start.elapsed().as_secs_f64());
        families.extend(self.up.collect());
        families.extend(self.scrape_duration.collect());
        families
    }

    /// Fresh `total` series for this cycle; `None` when there are no tasks.
    fn totals(&self, tasks: &[Task]) -> prometheus::Result<Option<GaugeVec>> {
        if tasks.is_empty() {
            return Ok(None);
        }

        let totals = GaugeVec::new(self.total.clone(), &[SOURCE_LABEL, PRIORITY_LABEL])?;
        for (group, count) in group_tasks(tasks) {
            totals
                .with_label_values(&[group.source.as_str(), group.priority.as_str()])
                .set(count as f64);
        }
        Ok(Some(totals))
    }
}
