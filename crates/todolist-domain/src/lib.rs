pub mod filter;
pub mod preferences;
pub mod query;
pub mod search;
pub mod task;
pub mod task_list;

pub use filter::{StatusFilter, TaskFilter};
pub use preferences::Preferences;
pub use query::TaskQuery;
pub use search::{CompositeSearcher, DescriptionSearcher, SearchBy, TaskSearcher, TitleSearcher};
pub use task::{DescriptionPolicy, Task, TaskDraft, TaskField, TaskId};
pub use task_list::TaskList;
