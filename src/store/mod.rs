//! JSON file persistence for the event collection.
//!
//! The backing file is the source of truth: a pretty-printed JSON array of
//! event records, read fresh on every operation and rewritten wholesale on
//! every mutation. Concurrent writers race on read-modify-write (last writer
//! wins); single-writer use is the supported mode.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::errors::AppError;
use crate::models::Event;

/// File-backed store for the event collection.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the full collection. Returns `None` if the backing file does not
    /// exist yet; that is an empty dataset, not an error.
    pub async fn load(&self) -> Result<Option<Vec<Event>>, AppError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(AppError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        let events = serde_json::from_str(&raw).map_err(|err| {
            AppError::Storage(format!(
                "Malformed event data in {}: {}",
                self.path.display(),
                err
            ))
        })?;

        Ok(Some(events))
    }

    /// Find a single record by id.
    pub async fn get(&self, id: &str) -> Result<Option<Event>, AppError> {
        let events = self.load().await?.unwrap_or_default();
        Ok(events.into_iter().find(|event| event.id == id))
    }

    /// Append a record, creating the backing file if needed.
    pub async fn append(&self, event: Event) -> Result<Event, AppError> {
        let mut events = self.load().await?.unwrap_or_default();
        events.push(event.clone());
        self.write(&events).await?;
        Ok(event)
    }

    /// Replace the record with the given id wholesale. Returns `None` if no
    /// record has that id.
    pub async fn replace(&self, id: &str, event: Event) -> Result<Option<Event>, AppError> {
        let mut events = self.load().await?.unwrap_or_default();
        match events.iter_mut().find(|existing| existing.id == id) {
            Some(slot) => *slot = event.clone(),
            None => return Ok(None),
        }
        self.write(&events).await?;
        Ok(Some(event))
    }

    /// Remove the record with the given id. Returns `false` if no record had
    /// that id.
    pub async fn remove(&self, id: &str) -> Result<bool, AppError> {
        let mut events = self.load().await?.unwrap_or_default();
        let before = events.len();
        events.retain(|event| event.id != id);
        if events.len() == before {
            return Ok(false);
        }
        self.write(&events).await?;
        Ok(true)
    }

    /// Rewrite the whole collection, pretty-printed.
    async fn write(&self, events: &[Event]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }

        let json = serde_json::to_string_pretty(events)?;
        tokio::fs::write(&self.path, json).await.map_err(|err| {
            AppError::Storage(format!(
                "Failed to write {}: {}",
                self.path.display(),
                err
            ))
        })?;

        Ok(())
    }
}
