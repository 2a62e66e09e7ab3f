use crate::traits::Serializer;
use todolist_core::{TodoError, TodoResult};

/// Compact JSON encoding, the same text `JSON.stringify` produces for local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned> Serializer<T> for JsonSerializer {
    fn serialize(&self, data: &T) -> TodoResult<String> {
        serde_json::to_string(data).map_err(|e| TodoError::Serialization(e.to_string()))
    }

    fn deserialize(&self, raw: &str) -> TodoResult<T> {
        serde_json::from_str(raw).map_err(|e| TodoError::Serialization(e.to_string()))
    }
}
