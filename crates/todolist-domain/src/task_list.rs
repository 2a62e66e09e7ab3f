use crate::{DescriptionPolicy, Task, TaskDraft, TaskField, TaskId, TaskQuery};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use todolist_core::{TodoError, TodoResult};
use uuid::Uuid;

/// Ordered list of tasks, in insertion order.
///
/// Every operation addresses tasks by id, so a position in a filtered view
/// can never hit the wrong task in the underlying list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from loaded records. Duplicate ids are replaced with fresh ones.
    pub fn from_tasks(mut tasks: Vec<Task>) -> Self {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &mut tasks {
            while !seen.insert(task.id) {
                task.id = Uuid::new_v4();
            }
        }
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_done).count()
    }

    /// Appends a new task, or leaves the list untouched if the draft is invalid.
    pub fn add(&mut self, draft: TaskDraft, policy: DescriptionPolicy) -> TodoResult<&Task> {
        draft.validate(policy)?;
        self.tasks.push(draft.into_task());
        let idx = self.tasks.len() - 1;
        Ok(&self.tasks[idx])
    }

    pub fn delete(&mut self, id: TaskId) -> TodoResult<Task> {
        let pos = self.position(id).ok_or_else(|| not_found(id))?;
        Ok(self.tasks.remove(pos))
    }

    pub fn toggle_done(&mut self, id: TaskId) -> TodoResult<bool> {
        Ok(self.get_mut(id)?.toggle_done())
    }

    pub fn toggle_editing(&mut self, id: TaskId) -> TodoResult<bool> {
        Ok(self.get_mut(id)?.toggle_editing())
    }

    pub fn edit_field(&mut self, id: TaskId, field: TaskField, value: String) -> TodoResult<()> {
        self.get_mut(id)?.set_field(field, value);
        Ok(())
    }

    /// Read-only view of the tasks matching `query`, in list order.
    pub fn filter(&self, query: &TaskQuery) -> Vec<&Task> {
        query.apply(&self.tasks)
    }

    fn get_mut(&mut self, id: TaskId) -> TodoResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: TaskId) -> TodoError {
    TodoError::NotFound(format!("Task {}", id))
}
