use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use todolist_core::{TodoError, TodoResult};
use uuid::Uuid;

pub type TaskId = Uuid;

/// A single note in the list.
///
/// The serialized shape matches what earlier versions wrote to local storage
/// (`task`, `description`, `isDone`, `isEditing`). Records without an `id`
/// are given a fresh one when loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default = "Uuid::new_v4")]
    pub id: TaskId,
    #[serde(rename = "task", alias = "title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub is_editing: bool,
}

impl Task {
    pub fn new(title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            is_done: false,
            is_editing: false,
        }
    }

    pub fn toggle_done(&mut self) -> bool {
        self.is_done = !self.is_done;
        self.is_done
    }

    pub fn toggle_editing(&mut self) -> bool {
        self.is_editing = !self.is_editing;
        self.is_editing
    }

    /// Sets one text field. Unlike creation, empty values are accepted.
    pub fn set_field(&mut self, field: TaskField, value: String) {
        match field {
            TaskField::Title => self.title = value,
            TaskField::Description => self.description = value,
        }
    }

    pub fn field(&self, field: TaskField) -> &str {
        match field {
            TaskField::Title => &self.title,
            TaskField::Description => &self.description,
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Editable text fields of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskField {
    Title,
    Description,
}

impl TaskField {
    pub fn other(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Title,
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Description => write!(f, "description"),
        }
    }
}

impl FromStr for TaskField {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" | "task" => Ok(Self::Title),
            "description" | "desc" => Ok(Self::Description),
            other => Err(TodoError::Validation(format!("Unknown task field: {}", other))),
        }
    }
}

/// Whether a blank description blocks task creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionPolicy {
    #[default]
    Required,
    Optional,
}

impl From<bool> for DescriptionPolicy {
    fn from(required: bool) -> Self {
        if required {
            Self::Required
        } else {
            Self::Optional
        }
    }
}

/// User input for a task that has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Rejects blank (whitespace-only) required fields.
    pub fn validate(&self, policy: DescriptionPolicy) -> TodoResult<()> {
        if self.title.trim().is_empty() {
            return Err(TodoError::Validation("Title must not be blank".to_string()));
        }
        if policy == DescriptionPolicy::Required && self.description.trim().is_empty() {
            return Err(TodoError::Validation(
                "Description must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_task(self) -> Task {
        Task::new(self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk".to_string(), "2 litres".to_string());
        assert!(!task.is_done);
        assert!(!task.is_editing);
        assert_eq!(task.title, "Buy milk");
    }

    #[test]
    fn test_toggle_done_twice_restores() {
        let mut task = Task::new("A".to_string(), "B".to_string());
        assert!(task.toggle_done());
        assert!(!task.toggle_done());
        assert!(!task.is_done);
    }

    #[test]
    fn test_done_and_editing_are_independent() {
        let mut task = Task::new("A".to_string(), "B".to_string());
        task.toggle_done();
        task.toggle_editing();
        assert!(task.is_done);
        assert!(task.is_editing);
    }

    #[test]
    fn test_set_field_allows_empty() {
        let mut task = Task::new("Title".to_string(), "Desc".to_string());
        task.set_field(TaskField::Title, String::new());
        assert_eq!(task.title, "");
        assert_eq!(task.description, "Desc");
    }

    #[test]
    fn test_draft_validation() {
        assert!(TaskDraft::new("Title", "Desc")
            .validate(DescriptionPolicy::Required)
            .is_ok());
        assert!(TaskDraft::new("   ", "Desc")
            .validate(DescriptionPolicy::Required)
            .is_err());
        assert!(TaskDraft::new("Title", " \t")
            .validate(DescriptionPolicy::Required)
            .is_err());
        assert!(TaskDraft::new("Title", "")
            .validate(DescriptionPolicy::Optional)
            .is_ok());
        assert!(TaskDraft::new("", "Desc")
            .validate(DescriptionPolicy::Optional)
            .is_err());
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("Title".parse::<TaskField>().unwrap(), TaskField::Title);
        assert_eq!("task".parse::<TaskField>().unwrap(), TaskField::Title);
        assert_eq!(
            "DESCRIPTION".parse::<TaskField>().unwrap(),
            TaskField::Description
        );
        assert!("due".parse::<TaskField>().is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let task = Task::new("Buy milk".to_string(), String::new());
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["task"], "Buy milk");
        assert_eq!(value["description"], "");
        assert_eq!(value["isDone"], false);
        assert_eq!(value["isEditing"], false);
        assert!(value.get("title").is_none());
    }

    #[test]
    fn test_legacy_record_gets_id() {
        let json = r#"{"task":"Old","description":"note","isDone":true,"isEditing":false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.title, "Old");
        assert!(task.is_done);
        assert!(!task.id.is_nil());
    }
}
