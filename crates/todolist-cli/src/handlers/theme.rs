use crate::cli::ThemeAction;
use crate::output;
use todolist_persistence::{KeyValueStore, TaskStore};

pub async fn handle<S: KeyValueStore>(
    store: &mut TaskStore<S>,
    action: ThemeAction,
) -> anyhow::Result<()> {
    let dark_mode = match action {
        ThemeAction::Show => store.preferences().dark_mode,
        ThemeAction::Dark => {
            store.set_dark_mode(true).await?;
            true
        }
        ThemeAction::Light => {
            store.set_dark_mode(false).await?;
            false
        }
        ThemeAction::Toggle => store.toggle_dark_mode().await?,
    };
    output::output_success(serde_json::json!({ "dark_mode": dark_mode }))
}
