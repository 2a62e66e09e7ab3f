//! Selection state for the task list.

/// State for single-item selection in a list.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    /// Move selection to the next item.
    pub fn next(&mut self, max_count: usize) {
        if max_count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(max_count - 1),
            None => 0,
        });
    }

    /// Move selection to the previous item.
    pub fn prev(&mut self) {
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn jump_to_first(&mut self, len: usize) {
        self.selected_index = if len > 0 { Some(0) } else { None };
    }

    pub fn jump_to_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    /// Clamp selection to valid range after the visible list changes.
    pub fn clamp(&mut self, max_count: usize) {
        match self.selected_index {
            _ if max_count == 0 => self.selected_index = None,
            Some(idx) if idx >= max_count => self.selected_index = Some(max_count - 1),
            None => self.selected_index = Some(0),
            _ => {}
        }
    }
}
