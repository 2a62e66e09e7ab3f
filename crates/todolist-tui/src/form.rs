use crate::input::InputState;
use todolist_domain::{TaskDraft, TaskField};

/// The two-field creation prompt.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub title: InputState,
    pub description: InputState,
    pub focus: TaskField,
}

impl TaskForm {
    pub fn new() -> Self {
        Self {
            title: InputState::new(),
            description: InputState::new(),
            focus: TaskField::Title,
        }
    }

    pub fn focused_input(&mut self) -> &mut InputState {
        match self.focus {
            TaskField::Title => &mut self.title,
            TaskField::Description => &mut self.description,
        }
    }

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.other();
    }

    pub fn draft(&self) -> TaskDraft {
        TaskDraft::new(self.title.as_str(), self.description.as_str())
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.focus = TaskField::Title;
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}
