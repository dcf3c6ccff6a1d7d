use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::{record_id, EventStore};
use crate::models::Event;
use crate::utils::AppError;

/// Event collection kept in a single JSON file.
///
/// Every call re-reads the file; mutations rewrite it completely. Records
/// are kept as raw JSON so fields and records this service does not
/// understand survive a rewrite untouched.
pub struct FileStore {
    path: PathBuf,
    // Held across read-modify-write so writers in this process can't clobber each other
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every stored record.
    ///
    /// Never fails: a missing, unreadable or malformed file reads as empty.
    /// The file may hold a bare array or an object with an `events` array.
    pub async fn read(&self) -> Vec<Value> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("📂 {} does not exist yet, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                log::warn!("⚠️  Could not read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        let data: Value = match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("⚠️  Invalid JSON in {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match data {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("events") {
                Some(Value::Array(items)) => items,
                _ => {
                    log::warn!("⚠️  {} has no events list", self.path.display());
                    Vec::new()
                }
            },
            _ => {
                log::warn!("⚠️  {} does not hold a list of events", self.path.display());
                Vec::new()
            }
        }
    }

    /// Overwrites the file with `records` as a pretty-printed array,
    /// creating parent directories first.
    pub async fn write(&self, records: &[Value]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&self.path, body).await?;

        log::debug!("💾 Wrote {} events to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl EventStore for FileStore {
    async fn list(&self) -> Result<Vec<Value>, AppError> {
        Ok(self.read().await)
    }

    async fn get(&self, id: i64) -> Result<Option<Value>, AppError> {
        Ok(self
            .read()
            .await
            .into_iter()
            .find(|record| record_id(record) == Some(id)))
    }

    async fn create(&self, event: Event) -> Result<Event, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read().await;
        if records.iter().any(|record| record_id(record) == Some(event.id)) {
            return Err(AppError::Conflict("Event ID already exists".to_string()));
        }

        records.push(serde_json::to_value(&event)?);
        self.write(&records).await?;

        Ok(event)
    }

    async fn replace(&self, id: i64, mut event: Event) -> Result<Option<Event>, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read().await;
        let Some(slot) = records.iter_mut().find(|record| record_id(record) == Some(id)) else {
            return Ok(None);
        };

        event.id = id;
        *slot = serde_json::to_value(&event)?;
        self.write(&records).await?;

        Ok(Some(event))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read().await;
        let before = records.len();
        records.retain(|record| record_id(record) != Some(id));

        if records.len() == before {
            return Ok(false);
        }

        self.write(&records).await?;
        Ok(true)
    }
}
