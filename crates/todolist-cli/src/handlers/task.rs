use crate::cli::{AddArgs, EditArgs, ListArgs};
use crate::output;
use todolist_core::TodoError;
use todolist_domain::{TaskDraft, TaskField, TaskQuery};
use todolist_persistence::{KeyValueStore, TaskStore};
use uuid::Uuid;

pub async fn add<S: KeyValueStore>(store: &mut TaskStore<S>, args: AddArgs) -> anyhow::Result<()> {
    let task = store
        .add(TaskDraft::new(args.title, args.description))
        .await?;
    output::output_success(&task)
}

pub fn list<S: KeyValueStore>(store: &TaskStore<S>, args: ListArgs) -> anyhow::Result<()> {
    let query = TaskQuery::new(args.search, args.status);
    output::output_list(store.view(&query))
}

pub fn get<S: KeyValueStore>(store: &TaskStore<S>, id: Uuid) -> anyhow::Result<()> {
    match store.get(id) {
        Some(task) => output::output_success(task),
        None => output::output_error(&format!("Task not found: {}", id)),
    }
}

pub async fn delete<S: KeyValueStore>(store: &mut TaskStore<S>, id: Uuid) -> anyhow::Result<()> {
    store.delete(id).await?;
    output::output_success(serde_json::json!({"deleted": id.to_string()}))
}

pub async fn toggle_done<S: KeyValueStore>(
    store: &mut TaskStore<S>,
    id: Uuid,
) -> anyhow::Result<()> {
    store.toggle_done(id).await?;
    output_task(store, id)
}

pub async fn toggle_edit<S: KeyValueStore>(
    store: &mut TaskStore<S>,
    id: Uuid,
) -> anyhow::Result<()> {
    store.toggle_editing(id).await?;
    output_task(store, id)
}

pub async fn edit<S: KeyValueStore>(store: &mut TaskStore<S>, args: EditArgs) -> anyhow::Result<()> {
    if args.title.is_none() && args.description.is_none() {
        return Err(TodoError::Validation(
            "Nothing to edit: pass --title and/or --description".to_string(),
        )
        .into());
    }

    if let Some(title) = args.title {
        store.edit_field(args.id, TaskField::Title, title).await?;
    }
    if let Some(description) = args.description {
        store
            .edit_field(args.id, TaskField::Description, description)
            .await?;
    }
    output_task(store, args.id)
}

fn output_task<S: KeyValueStore>(store: &TaskStore<S>, id: Uuid) -> anyhow::Result<()> {
    let task = store
        .get(id)
        .ok_or_else(|| TodoError::NotFound(format!("Task {}", id)))?;
    output::output_success(task)
}
