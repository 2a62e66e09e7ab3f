use crate::{
    dialog::{handle_dialog_input, DialogAction},
    events::{Event, EventHandler},
    form::TaskForm,
    input::InputState,
    selection::SelectionState,
    ui,
};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use todolist_core::{TodoError, TodoResult};
use todolist_domain::{StatusFilter, Task, TaskField, TaskId, TaskQuery};
use todolist_persistence::{KeyValueStore, TaskStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Search,
    CreateTask,
    EditTask(TaskId),
}

pub struct App<S: KeyValueStore> {
    pub should_quit: bool,
    pub mode: AppMode,
    pub store: TaskStore<S>,
    pub search: InputState,
    pub status_filter: StatusFilter,
    pub selection: SelectionState,
    pub form: TaskForm,
    pub edit_field: TaskField,
    pub edit_input: InputState,
    pub message: Option<String>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(store: TaskStore<S>) -> Self {
        let mut app = Self {
            should_quit: false,
            mode: AppMode::Normal,
            store,
            search: InputState::new(),
            status_filter: StatusFilter::All,
            selection: SelectionState::new(),
            form: TaskForm::new(),
            edit_field: TaskField::Title,
            edit_input: InputState::new(),
            message: None,
        };
        app.refresh_selection();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn query(&self) -> TaskQuery {
        TaskQuery::new(self.search.as_str(), self.status_filter)
    }

    /// Tasks shown in the list, recomputed from the store on every call.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.view(&self.query())
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        let idx = self.selection.get()?;
        self.visible_tasks().get(idx).map(|task| task.id)
    }

    pub async fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }
        self.message = None;

        let result = match self.mode {
            AppMode::Normal => self.handle_normal_key(key.code).await,
            AppMode::Search => {
                self.handle_search_key(key.code);
                Ok(())
            }
            AppMode::CreateTask => self.handle_create_key(key.code).await,
            AppMode::EditTask(id) => self.handle_edit_key(id, key.code).await,
        };
        if let Err(e) = result {
            self.report(e);
        }
        self.refresh_selection();
    }

    async fn handle_normal_key(&mut self, code: KeyCode) -> TodoResult<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.visible_tasks().len();
                self.selection.next(len);
            }
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(),
            KeyCode::Char('g') | KeyCode::Home => {
                let len = self.visible_tasks().len();
                self.selection.jump_to_first(len);
            }
            KeyCode::Char('G') | KeyCode::End => {
                let len = self.visible_tasks().len();
                self.selection.jump_to_last(len);
            }
            KeyCode::Char('n') | KeyCode::Char('+') => self.mode = AppMode::CreateTask,
            KeyCode::Char('/') => self.mode = AppMode::Search,
            KeyCode::Char('f') => self.status_filter = self.status_filter.next(),
            KeyCode::Char('t') => {
                self.store.toggle_dark_mode().await?;
            }
            KeyCode::Char(' ') | KeyCode::Char('x') => {
                if let Some(id) = self.selected_task_id() {
                    self.store.toggle_done(id).await?;
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_task_id() {
                    self.toggle_edit(id).await?;
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_task_id() {
                    self.store.delete(id).await?;
                }
            }
            KeyCode::Esc => {
                self.search.clear();
                self.status_filter = StatusFilter::All;
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match handle_dialog_input(&mut self.search, code) {
            DialogAction::Cancel => {
                self.search.clear();
                self.mode = AppMode::Normal;
            }
            DialogAction::Confirm => self.mode = AppMode::Normal,
            DialogAction::None | DialogAction::SwitchField => {
                let len = self.visible_tasks().len();
                self.selection.jump_to_first(len);
            }
        }
    }

    async fn handle_create_key(&mut self, code: KeyCode) -> TodoResult<()> {
        match handle_dialog_input(self.form.focused_input(), code) {
            // Inputs are kept so reopening the prompt resumes the draft
            DialogAction::Cancel => self.mode = AppMode::Normal,
            DialogAction::SwitchField => self.form.switch_focus(),
            DialogAction::Confirm => {
                let task = self.store.add(self.form.draft()).await?;
                self.form.clear();
                self.mode = AppMode::Normal;
                self.select_task(task.id);
            }
            DialogAction::None => {}
        }
        Ok(())
    }

    async fn handle_edit_key(&mut self, id: TaskId, code: KeyCode) -> TodoResult<()> {
        let before = self.edit_input.as_str().to_string();
        match handle_dialog_input(&mut self.edit_input, code) {
            DialogAction::Cancel | DialogAction::Confirm => self.toggle_edit(id).await?,
            DialogAction::SwitchField => {
                let next = self.edit_field.other();
                self.begin_edit(id, next);
            }
            DialogAction::None => {
                if self.edit_input.as_str() != before {
                    let value = self.edit_input.as_str().to_string();
                    self.store.edit_field(id, self.edit_field, value).await?;
                }
            }
        }
        Ok(())
    }

    /// Opens the inline editor for `id`, or closes it when it is already open.
    /// The stored `is_editing` flag is brought in line with the editor either way.
    async fn toggle_edit(&mut self, id: TaskId) -> TodoResult<()> {
        let flagged = self
            .store
            .get(id)
            .map(|task| task.is_editing)
            .ok_or_else(|| TodoError::NotFound(format!("Task {}", id)))?;

        if self.mode == AppMode::EditTask(id) {
            if flagged {
                self.store.toggle_editing(id).await?;
            }
            self.mode = AppMode::Normal;
        } else {
            if !flagged {
                self.store.toggle_editing(id).await?;
            }
            self.begin_edit(id, TaskField::Title);
            self.mode = AppMode::EditTask(id);
        }
        Ok(())
    }

    fn begin_edit(&mut self, id: TaskId, field: TaskField) {
        self.edit_field = field;
        let value = self
            .store
            .get(id)
            .map(|task| task.field(field).to_string())
            .unwrap_or_default();
        self.edit_input.set(value);
    }

    fn select_task(&mut self, id: TaskId) {
        let position = self.visible_tasks().iter().position(|task| task.id == id);
        if position.is_some() {
            self.selection.set(position);
        }
    }

    fn refresh_selection(&mut self) {
        let len = self.visible_tasks().len();
        self.selection.clamp(len);
    }

    fn report(&mut self, error: TodoError) {
        match error {
            TodoError::NotFound(_) => {
                tracing::warn!("Ignoring operation on missing task: {}", error);
                self.mode = AppMode::Normal;
            }
            TodoError::Validation(ref reason) => {
                tracing::debug!("Rejected input: {}", reason);
                self.message = Some(reason.clone());
            }
            _ => {
                tracing::error!("Store operation failed: {}", error);
                self.message = Some(error.to_string());
            }
        }
    }

    pub async fn run(&mut self) -> TodoResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> TodoResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key).await,
                Some(Event::Tick) => {}
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
