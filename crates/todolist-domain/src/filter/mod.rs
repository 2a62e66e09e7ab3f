//! Task filtering functionality.
//!
//! Provides the TaskFilter trait and the status filter offered by the view selector.

pub mod status_filter;

pub use status_filter::StatusFilter;

use crate::Task;

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}
