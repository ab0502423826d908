//! Ordering task lists for display

use crate::task::Task;

/// The field a task list can be ordered by
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Status,
}

/// Returns a copy of `tasks` ordered by `key`. The input is never mutated.
///
/// Comparison is plain lexicographic on the field's raw string value: dates
/// compare as text (which matches chronological order as long as producers
/// stick to `YYYY-MM-DD`), and statuses compare alphabetically (`""` <
/// `Cancelled` < `Completed` < `In-progress`), not in workflow order. The
/// sort is stable, so tasks that compare equal keep their relative order.
pub fn sort_tasks(tasks: &[Task], key: SortKey) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match key {
        SortKey::Date => sorted.sort_by(|a, b| a.date().cmp(b.date())),
        SortKey::Status => sorted.sort_by(|a, b| a.status().as_str().cmp(b.status().as_str())),
    }
    sorted
}
