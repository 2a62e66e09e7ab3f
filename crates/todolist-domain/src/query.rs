use crate::search::{CompositeSearcher, TaskSearcher};
use crate::{StatusFilter, Task, TaskFilter};
use serde::{Deserialize, Serialize};

/// What the list view currently shows: a search string plus a status filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskQuery {
    pub search: String,
    pub status: StatusFilter,
}

impl TaskQuery {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.status == StatusFilter::All
    }

    /// Tasks matching the search in title or description and the status filter.
    /// Pure: the input is never modified and order is preserved.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        if self.is_unfiltered() {
            return tasks.iter().collect();
        }
        let searcher = CompositeSearcher::all(self.search.as_str());
        tasks
            .iter()
            .filter(|task| searcher.matches(task) && self.status.matches(task))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, description: &str, done: bool) -> Task {
        let mut task = Task::new(title.to_string(), description.to_string());
        task.is_done = done;
        task
    }

    #[test]
    fn test_search_examples() {
        let tasks = vec![task("Buy milk", "", false)];

        let found = TaskQuery::new("milk", StatusFilter::All).apply(&tasks);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Buy milk");

        assert!(TaskQuery::new("bread", StatusFilter::All)
            .apply(&tasks)
            .is_empty());
    }

    #[test]
    fn test_status_example() {
        let tasks = vec![task("A", "", true), task("B", "", false)];

        let found = TaskQuery::new("", StatusFilter::Incomplete).apply(&tasks);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "B");
    }

    #[test]
    fn test_search_and_status_combine() {
        let tasks = vec![
            task("Write report", "quarterly", true),
            task("Review report", "", false),
            task("Call mom", "about the report", false),
            task("Water plants", "", false),
        ];

        let found: Vec<&str> = TaskQuery::new("REPORT", StatusFilter::Incomplete)
            .apply(&tasks)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(found, vec!["Review report", "Call mom"]);
    }

    #[test]
    fn test_apply_is_pure_and_idempotent() {
        let tasks = vec![task("A", "x", true), task("B", "y", false)];
        let snapshot = tasks.clone();
        let query = TaskQuery::new("a", StatusFilter::Complete);

        let first: Vec<Task> = query.apply(&tasks).into_iter().cloned().collect();
        let second: Vec<Task> = query.apply(&tasks).into_iter().cloned().collect();

        assert_eq!(first, second);
        assert_eq!(tasks, snapshot);
    }

    #[test]
    fn test_is_unfiltered() {
        assert!(TaskQuery::default().is_unfiltered());
        assert!(!TaskQuery::new("x", StatusFilter::All).is_unfiltered());
        assert!(!TaskQuery::new("", StatusFilter::Complete).is_unfiltered());
    }

    #[test]
    fn test_unfiltered_returns_every_task_in_order() {
        let tasks = vec![task("B", "", true), task("A", "", false)];
        let found: Vec<&str> = TaskQuery::default()
            .apply(&tasks)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(found, vec!["B", "A"]);
    }
}
