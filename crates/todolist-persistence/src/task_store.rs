use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};
use todolist_core::TodoResult;
use todolist_domain::{
    DescriptionPolicy, Preferences, Task, TaskDraft, TaskField, TaskId, TaskList, TaskQuery,
};

/// Key holding the JSON array of tasks.
pub const TASKS_KEY: &str = "tasks";
/// Key holding the dark-mode preference as `"true"` or `"false"`.
pub const DARK_MODE_KEY: &str = "darkMode";

/// The task list and preferences, kept in sync with a [`KeyValueStore`].
///
/// State is read once in [`TaskStore::load`]. Each mutation is applied to a
/// copy, the whole `tasks` value is rewritten, and only then does the copy
/// replace the in-memory list.
pub struct TaskStore<S: KeyValueStore> {
    tasks: TaskList,
    preferences: Preferences,
    policy: DescriptionPolicy,
    store: S,
    serializer: JsonSerializer,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Hydrate from `store`. Missing or unreadable task data starts an empty list.
    pub async fn load(store: S, policy: DescriptionPolicy) -> TodoResult<Self> {
        let serializer = JsonSerializer;
        let raw_tasks = store.get(TASKS_KEY).await?;

        let mut needs_rewrite = false;
        let tasks = match raw_tasks.as_deref() {
            None => TaskList::new(),
            Some(raw) => match Serializer::<Vec<Task>>::deserialize(&serializer, raw) {
                Ok(tasks) => {
                    let tasks = TaskList::from_tasks(tasks);
                    // Records from older writers lack ids; store the ones assigned now
                    needs_rewrite = serializer.serialize(&tasks)? != raw;
                    tasks
                }
                Err(e) => {
                    tracing::warn!("Ignoring unreadable task data, starting empty: {}", e);
                    TaskList::new()
                }
            },
        };

        let dark_mode = store.get(DARK_MODE_KEY).await?;
        let preferences = Preferences::from_stored(dark_mode.as_deref());

        tracing::info!(
            "Loaded {} tasks (dark mode: {})",
            tasks.len(),
            preferences.dark_mode
        );

        let task_store = Self {
            tasks,
            preferences,
            policy,
            store,
            serializer,
        };
        if needs_rewrite {
            tracing::info!("Normalizing stored tasks");
            task_store.write_tasks(&task_store.tasks).await?;
        }
        Ok(task_store)
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn policy(&self) -> DescriptionPolicy {
        self.policy
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Tasks visible under `query`, in list order.
    pub fn view(&self, query: &TaskQuery) -> Vec<&Task> {
        self.tasks.filter(query)
    }

    /// `(total, done)` task counts.
    pub fn counts(&self) -> (usize, usize) {
        (self.tasks.len(), self.tasks.completed_count())
    }

    pub async fn add(&mut self, draft: TaskDraft) -> TodoResult<Task> {
        let mut tasks = self.tasks.clone();
        let task = match tasks.add(draft, self.policy) {
            Ok(task) => task.clone(),
            Err(e) => {
                tracing::debug!("Rejected new task: {}", e);
                return Err(e);
            }
        };
        self.commit_tasks(tasks).await?;
        tracing::debug!("Added task {}", task.id);
        Ok(task)
    }

    pub async fn delete(&mut self, id: TaskId) -> TodoResult<Task> {
        let mut tasks = self.tasks.clone();
        let removed = tasks.delete(id)?;
        self.commit_tasks(tasks).await?;
        tracing::debug!("Deleted task {}", id);
        Ok(removed)
    }

    /// Returns the new `is_done` value.
    pub async fn toggle_done(&mut self, id: TaskId) -> TodoResult<bool> {
        let mut tasks = self.tasks.clone();
        let done = tasks.toggle_done(id)?;
        self.commit_tasks(tasks).await?;
        Ok(done)
    }

    /// Returns the new `is_editing` value.
    pub async fn toggle_editing(&mut self, id: TaskId) -> TodoResult<bool> {
        let mut tasks = self.tasks.clone();
        let editing = tasks.toggle_editing(id)?;
        self.commit_tasks(tasks).await?;
        Ok(editing)
    }

    pub async fn edit_field(
        &mut self,
        id: TaskId,
        field: TaskField,
        value: String,
    ) -> TodoResult<()> {
        let mut tasks = self.tasks.clone();
        tasks.edit_field(id, field, value)?;
        self.commit_tasks(tasks).await
    }

    pub async fn set_dark_mode(&mut self, dark_mode: bool) -> TodoResult<()> {
        self.commit_preferences(Preferences { dark_mode }).await
    }

    /// Returns the new dark-mode value.
    pub async fn toggle_dark_mode(&mut self) -> TodoResult<bool> {
        let mut preferences = self.preferences;
        let dark_mode = preferences.toggle_dark_mode();
        self.commit_preferences(preferences).await?;
        Ok(dark_mode)
    }

    /// Makes `tasks` current only once it is written; a failed write keeps the old list.
    async fn commit_tasks(&mut self, tasks: TaskList) -> TodoResult<()> {
        self.write_tasks(&tasks).await?;
        self.tasks = tasks;
        Ok(())
    }

    async fn commit_preferences(&mut self, preferences: Preferences) -> TodoResult<()> {
        self.store
            .set(DARK_MODE_KEY, preferences.dark_mode_value().to_string())
            .await?;
        self.preferences = preferences;
        Ok(())
    }

    async fn write_tasks(&self, tasks: &TaskList) -> TodoResult<()> {
        let raw = self.serializer.serialize(tasks)?;
        self.store.set(TASKS_KEY, raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::traits::MockKeyValueStore;
    use todolist_core::TodoError;
    use todolist_domain::StatusFilter;
    use uuid::Uuid;

    async fn empty_store() -> TaskStore<MemoryStore> {
        TaskStore::load(MemoryStore::new(), DescriptionPolicy::Required)
            .await
            .unwrap()
    }

    async fn stored_tasks(store: &TaskStore<MemoryStore>) -> Vec<Task> {
        let raw = store.backend().get(TASKS_KEY).await.unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_load_empty() {
        let store = empty_store().await;
        assert!(store.tasks().is_empty());
        assert!(!store.preferences().dark_mode);
        assert_eq!(store.backend().get(TASKS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_every_mutation_is_persisted() {
        let mut store = empty_store().await;

        let task = store.add(TaskDraft::new("Buy milk", "2 litres")).await.unwrap();
        assert_eq!(stored_tasks(&store).await, store.tasks().tasks());

        store.toggle_done(task.id).await.unwrap();
        assert!(stored_tasks(&store).await[0].is_done);

        store.toggle_editing(task.id).await.unwrap();
        assert!(stored_tasks(&store).await[0].is_editing);

        store
            .edit_field(task.id, TaskField::Title, "Buy oat milk".to_string())
            .await
            .unwrap();
        assert_eq!(stored_tasks(&store).await[0].title, "Buy oat milk");

        store.delete(task.id).await.unwrap();
        assert!(stored_tasks(&store).await.is_empty());
    }

    #[tokio::test]
    async fn test_reload_reproduces_state() {
        let mut store = empty_store().await;
        let first = store.add(TaskDraft::new("first", "one")).await.unwrap();
        store.add(TaskDraft::new("second", "two")).await.unwrap();
        store.toggle_done(first.id).await.unwrap();
        store.set_dark_mode(true).await.unwrap();

        let backend = MemoryStore::with_entries([
            (
                TASKS_KEY,
                store.backend().get(TASKS_KEY).await.unwrap().unwrap(),
            ),
            (
                DARK_MODE_KEY,
                store.backend().get(DARK_MODE_KEY).await.unwrap().unwrap(),
            ),
        ]);
        let reloaded = TaskStore::load(backend, DescriptionPolicy::Required)
            .await
            .unwrap();

        assert_eq!(reloaded.tasks(), store.tasks());
        assert!(reloaded.preferences().dark_mode);
    }

    #[tokio::test]
    async fn test_corrupt_tasks_start_empty() {
        let backend = MemoryStore::with_entries([(TASKS_KEY, "[{\"task\": oops")]);
        let store = TaskStore::load(backend, DescriptionPolicy::Required)
            .await
            .unwrap();
        assert!(store.tasks().is_empty());
    }

    #[tokio::test]
    async fn test_legacy_tasks_get_ids_persisted() {
        let legacy = r#"[{"task":"Old note","description":"from the browser","isDone":true,"isEditing":false}]"#;
        let backend = MemoryStore::with_entries([(TASKS_KEY, legacy)]);
        let store = TaskStore::load(backend, DescriptionPolicy::Required)
            .await
            .unwrap();

        let id = store.tasks().tasks()[0].id;
        let persisted = stored_tasks(&store).await;
        assert_eq!(persisted[0].id, id);
        assert_eq!(persisted[0].title, "Old note");
        assert!(persisted[0].is_done);
    }

    #[tokio::test]
    async fn test_rejected_add_does_not_write() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(|_| Ok(None));
        backend.expect_set().never();

        let mut store = TaskStore::load(backend, DescriptionPolicy::Required)
            .await
            .unwrap();
        let err = store.add(TaskDraft::new("title", "   ")).await.unwrap_err();
        assert!(err.is_validation());
        assert!(store.tasks().is_empty());
    }

    #[tokio::test]
    async fn test_add_writes_tasks_key_once() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(|_| Ok(None));
        backend
            .expect_set()
            .withf(|key, value| key.to_string() == TASKS_KEY && value.contains("Buy milk"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut store = TaskStore::load(backend, DescriptionPolicy::Required)
            .await
            .unwrap();
        store.add(TaskDraft::new("Buy milk", "today")).await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_id_does_not_write() {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(|_| Ok(None));
        backend.expect_set().never();

        let mut store = TaskStore::load(backend, DescriptionPolicy::Required)
            .await
            .unwrap();
        let missing = Uuid::new_v4();
        assert!(store.delete(missing).await.unwrap_err().is_not_found());
        assert!(store.toggle_done(missing).await.is_err());
    }

    #[tokio::test]
    async fn test_dark_mode_round_trip() {
        let mut store = empty_store().await;
        assert!(store.toggle_dark_mode().await.unwrap());
        assert_eq!(
            store.backend().get(DARK_MODE_KEY).await.unwrap().as_deref(),
            Some("true")
        );
        store.set_dark_mode(false).await.unwrap();
        assert_eq!(
            store.backend().get(DARK_MODE_KEY).await.unwrap().as_deref(),
            Some("false")
        );
    }

    #[tokio::test]
    async fn test_optional_description_policy() {
        let mut store = TaskStore::load(MemoryStore::new(), DescriptionPolicy::Optional)
            .await
            .unwrap();
        store.add(TaskDraft::new("Just a title", "")).await.unwrap();
        assert_eq!(store.counts(), (1, 0));
    }

    #[tokio::test]
    async fn test_view_uses_query() {
        let mut store = empty_store().await;
        let a = store.add(TaskDraft::new("Buy milk", "dairy")).await.unwrap();
        store.add(TaskDraft::new("Buy bread", "bakery")).await.unwrap();
        store.toggle_done(a.id).await.unwrap();

        let view = store.view(&TaskQuery::new("buy", StatusFilter::Complete));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, a.id);
        assert_eq!(store.counts(), (2, 1));
    }

    fn failing_backend(existing_tasks: Option<String>) -> MockKeyValueStore {
        let mut backend = MockKeyValueStore::new();
        backend.expect_get().returning(move |key| {
            Ok(if key == TASKS_KEY {
                existing_tasks.clone()
            } else {
                None
            })
        });
        backend
            .expect_set()
            .returning(|_, _| Err(TodoError::Io(std::io::Error::other("disk full"))));
        backend
    }

    #[tokio::test]
    async fn test_failed_write_keeps_list_unchanged() {
        let mut store = TaskStore::load(failing_backend(None), DescriptionPolicy::Required)
            .await
            .unwrap();

        assert!(store.add(TaskDraft::new("Buy milk", "today")).await.is_err());
        assert!(store.add(TaskDraft::new("Buy milk", "today")).await.is_err());
        assert!(store.tasks().is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_rolls_back_every_mutation() {
        let existing = Task::new("Buy milk".to_string(), "today".to_string());
        let raw = serde_json::to_string(&vec![existing.clone()]).unwrap();
        let mut store = TaskStore::load(failing_backend(Some(raw)), DescriptionPolicy::Required)
            .await
            .unwrap();
        let before = store.tasks().clone();

        assert!(store.toggle_done(existing.id).await.is_err());
        assert!(store.toggle_editing(existing.id).await.is_err());
        assert!(store
            .edit_field(existing.id, TaskField::Title, "changed".to_string())
            .await
            .is_err());
        assert!(store.delete(existing.id).await.is_err());
        assert_eq!(store.tasks(), &before);

        assert!(store.toggle_dark_mode().await.is_err());
        assert!(store.set_dark_mode(true).await.is_err());
        assert!(!store.preferences().dark_mode);
    }
}
