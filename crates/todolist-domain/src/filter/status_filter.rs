use super::TaskFilter;
use crate::Task;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use todolist_core::TodoError;

/// Completion-status filter offered by the view selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl StatusFilter {
    pub const VARIANTS: [StatusFilter; 3] = [Self::All, Self::Complete, Self::Incomplete];

    /// Next option in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Complete,
            Self::Complete => Self::Incomplete,
            Self::Incomplete => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Complete => "Complete",
            Self::Incomplete => "Incomplete",
        }
    }
}

impl TaskFilter for StatusFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Complete => task.is_done,
            Self::Incomplete => !task.is_done,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "complete" | "completed" | "done" => Ok(Self::Complete),
            "incomplete" | "pending" | "todo" => Ok(Self::Incomplete),
            other => Err(TodoError::Validation(format!(
                "Unknown status filter '{}', expected all, complete or incomplete",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(done: bool) -> Task {
        let mut task = Task::new("t".to_string(), String::new());
        task.is_done = done;
        task
    }

    #[test]
    fn test_matches() {
        assert!(StatusFilter::All.matches(&task(true)));
        assert!(StatusFilter::All.matches(&task(false)));
        assert!(StatusFilter::Complete.matches(&task(true)));
        assert!(!StatusFilter::Complete.matches(&task(false)));
        assert!(StatusFilter::Incomplete.matches(&task(false)));
        assert!(!StatusFilter::Incomplete.matches(&task(true)));
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut filter = StatusFilter::default();
        for expected in [
            StatusFilter::Complete,
            StatusFilter::Incomplete,
            StatusFilter::All,
        ] {
            filter = filter.next();
            assert_eq!(filter, expected);
        }
    }

    #[test]
    fn test_parse_and_display() {
        for variant in StatusFilter::VARIANTS {
            assert_eq!(variant.to_string().parse::<StatusFilter>().unwrap(), variant);
        }
        assert_eq!(
            "INCOMPLETE".parse::<StatusFilter>().unwrap(),
            StatusFilter::Incomplete
        );
        assert!("archived".parse::<StatusFilter>().is_err());
    }
}
