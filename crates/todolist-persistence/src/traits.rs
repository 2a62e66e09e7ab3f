use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todolist_core::TodoResult;
use uuid::Uuid;

/// Version of the on-disk store envelope.
pub const FORMAT_VERSION: u32 = 1;

/// Metadata for persistence operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// Version of the persistence format
    pub format_version: u32,
    /// ID of the instance that performed the save
    pub instance_id: Uuid,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
}

impl PersistenceMetadata {
    pub fn new(instance_id: Uuid) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// String-keyed, string-valued storage with local-storage semantics.
///
/// `set` is durable once it returns.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any.
    async fn get(&self, key: &str) -> TodoResult<Option<String>>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> TodoResult<()>;
}

/// Trait for serialization/deserialization strategies
/// Allows swapping the text encoding of stored values.
pub trait Serializer<T>: Send + Sync {
    /// Serialize data to a stored string value
    fn serialize(&self, data: &T) -> TodoResult<String>;

    /// Deserialize data from a stored string value
    fn deserialize(&self, raw: &str) -> TodoResult<T>;
}
