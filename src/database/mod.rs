pub mod file_store;

pub use file_store::FileStore;

use async_trait::async_trait;
use serde_json::Value;

use crate::models::Event;
use crate::utils::AppError;

/// Storage capability used by the HTTP handlers.
///
/// Handlers only talk to this trait, so the JSON file can be replaced by
/// another backend without touching them. Stored records are handed out
/// as untyped JSON exactly as stored; only incoming bodies are `Event`s.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Every stored record, in storage order
    async fn list(&self) -> Result<Vec<Value>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<Value>, AppError>;

    /// Appends `event`. Fails with `AppError::Conflict` when any stored
    /// record already carries its id.
    async fn create(&self, event: Event) -> Result<Event, AppError>;

    /// Replaces the record stored under `id` wholesale. The stored record
    /// always carries `id`, whatever the body said. `None` if nothing matched.
    async fn replace(&self, id: i64, event: Event) -> Result<Option<Event>, AppError>;

    /// Removes every record with `id`. Returns false (and writes nothing)
    /// when no record matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

/// Integer `id` of a stored record, if it has one
pub fn record_id(record: &Value) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}
