use crate::event::Event;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key under which the admin panel keeps its event list
pub const EVENTS_KEY: &str = "events";

/// Source of the persisted event collection
pub trait EventStore {
    fn load(&self) -> Result<Vec<Event>, StoreError>;
    fn save(&self, events: &[Event]) -> Result<(), StoreError>;
}

/// A key-value store holding one JSON document per key in a directory, with
/// key `k` stored in `k.json`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> LocalStore {
        LocalStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Returns `None` if nothing has been stored under `key` yet
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key);
        let src = match fs::read_to_string(&path) {
            Ok(src) => src,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        if src.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&src)
            .map(Some)
            .map_err(|source| StoreError::Json { path, source })
    }

    /// Store `value` under `key`, replacing the previous document atomically
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        let data = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Wrote {key}");
        Ok(())
    }
}

impl EventStore for LocalStore {
    fn load(&self) -> Result<Vec<Event>, StoreError> {
        let events = self
            .get::<Vec<Event>>(EVENTS_KEY)?
            .unwrap_or_default();
        tracing::info!(
            count = events.len(),
            dir = %self.dir.display(),
            "Loaded events"
        );
        Ok(events)
    }

    fn save(&self, events: &[Event]) -> Result<(), StoreError> {
        self.set(EVENTS_KEY, events)?;
        tracing::info!(count = events.len(), dir = %self.dir.display(), "Saved events");
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
