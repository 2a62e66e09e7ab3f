use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{KeyValueStore, PersistenceMetadata, FORMAT_VERSION};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use todolist_core::{TodoError, TodoResult};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Wrapper structure for the JSON store file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    pub metadata: PersistenceMetadata,
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl JsonEnvelope {
    pub fn empty() -> Self {
        Self {
            version: FORMAT_VERSION,
            metadata: PersistenceMetadata::new(Uuid::new_v4()),
            entries: BTreeMap::new(),
        }
    }

    pub fn to_json_string(&self) -> TodoResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TodoError::Serialization(e.to_string()))
    }
}

/// JSON file-backed key-value store.
///
/// Entries are held in memory after `open`; every `set`
/// rewrites the whole file atomically.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; a file
    /// that is not a valid envelope is an error and is left untouched.
    pub async fn open(path: impl AsRef<Path>) -> TodoResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            Self::read_envelope(&path).await?.entries
        } else {
            tracing::info!("No store at {}, starting empty", path.display());
            BTreeMap::new()
        };

        Ok(Self {
            path,
            instance_id: Uuid::new_v4(),
            entries: Mutex::new(entries),
        })
    }

    /// Get the instance ID for this store
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    async fn read_envelope(path: &Path) -> TodoResult<JsonEnvelope> {
        let file_bytes = AtomicWriter::read_all(path).await?;

        let envelope: JsonEnvelope = serde_json::from_slice(&file_bytes).map_err(|e| {
            TodoError::Serialization(format!("{} is not a todolist store: {}", path.display(), e))
        })?;

        if envelope.version != FORMAT_VERSION {
            return Err(TodoError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }

        tracing::info!(
            "Loaded {} entries ({} bytes) from {}",
            envelope.entries.len(),
            file_bytes.len(),
            path.display()
        );
        Ok(envelope)
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> TodoResult<()> {
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: PersistenceMetadata::new(self.instance_id),
            entries: entries.clone(),
        };
        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| TodoError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> TodoResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> TodoResult<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value);
        self.persist(&entries).await
    }
}
