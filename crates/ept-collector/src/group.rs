use std::collections::HashMap;

use ept_client::Task;

/// Composite key of the `total` series.
///
/// Both parts are stored lower-cased. Keyed as a pair, so values containing any
/// separator character never collide with another group.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskGroup {
    pub source: String,
    pub priority: String,
}

impl TaskGroup {
    pub fn of(task: &Task) -> Self {
        Self {
            source: task.source.to_lowercase(),
            priority: task.priority.to_lowercase(),
        }
    }
}

/// Count tasks per lower-cased `(source, priority)`.
///
/// Every task lands in exactly one group, so the counts always sum to `tasks.len()`.
pub fn group_tasks(tasks: &[Task]) -> HashMap<TaskGroup, u64> {
    let mut groups: HashMap<TaskGroup, u64> = HashMap::new();
    for task in tasks {
        *groups.entry(TaskGroup::of(task)).or_default() += 1;
    }
    groups
}
