//! Task search functionality.
//!
//! Provides traits and implementations for searching tasks by text.
//! Used by both the TUI and the CLI for consistent search behavior.

use crate::Task;

/// Trait for searching tasks by various criteria.
pub trait TaskSearcher {
    /// Returns true if the task matches the search criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Search tasks by title (case-insensitive).
pub struct TitleSearcher {
    query: String,
}

impl TitleSearcher {
    /// Create a new title searcher with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskSearcher for TitleSearcher {
    fn matches(&self, task: &Task) -> bool {
        task.title.to_lowercase().contains(&self.query)
    }
}

/// Search tasks by description (case-insensitive).
pub struct DescriptionSearcher {
    query: String,
}

impl DescriptionSearcher {
    /// Create a new description searcher with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskSearcher for DescriptionSearcher {
    fn matches(&self, task: &Task) -> bool {
        task.description.to_lowercase().contains(&self.query)
    }
}

/// Enum dispatch for searching tasks by a specific field.
pub enum SearchBy {
    Title(TitleSearcher),
    Description(DescriptionSearcher),
}

impl SearchBy {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Title(s) => s.matches(task),
            Self::Description(s) => s.matches(task),
        }
    }
}

/// Composite searcher that matches if any sub-searcher matches.
pub struct CompositeSearcher {
    searchers: Vec<SearchBy>,
}

impl CompositeSearcher {
    /// Create a composite searcher over title and description.
    pub fn all(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            searchers: vec![
                SearchBy::Title(TitleSearcher::new(query.clone())),
                SearchBy::Description(DescriptionSearcher::new(query)),
            ],
        }
    }
}

impl TaskSearcher for CompositeSearcher {
    fn matches(&self, task: &Task) -> bool {
        self.searchers.iter().any(|searcher| searcher.matches(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, description: &str) -> Task {
        Task::new(title.to_string(), description.to_string())
    }

    #[test]
    fn test_title_searcher_matches() {
        let task = task("Fix authentication bug", "");

        assert!(TitleSearcher::new("auth").matches(&task));
        assert!(TitleSearcher::new("AUTH").matches(&task)); // case insensitive
        assert!(!TitleSearcher::new("database").matches(&task));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let task = task("Any task", "");
        assert!(TitleSearcher::new("").matches(&task));
        assert!(DescriptionSearcher::new("").matches(&task));
        assert!(CompositeSearcher::all("").matches(&task));
    }

    #[test]
    fn test_description_searcher_matches() {
        let task = task("Groceries", "Milk, eggs and Bread");
        assert!(DescriptionSearcher::new("bread").matches(&task));
        assert!(!DescriptionSearcher::new("butter").matches(&task));
    }

    #[test]
    fn test_composite_searcher_any_match() {
        let task = task("Groceries", "Buy milk");

        assert!(CompositeSearcher::all("grocer").matches(&task));
        assert!(CompositeSearcher::all("MILK").matches(&task));
        assert!(!CompositeSearcher::all("bread").matches(&task));
    }
}
