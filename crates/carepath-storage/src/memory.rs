use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use crate::error::StorageError;
use crate::store::{ChangeFeed, KeyValueStore, StorageChange, WriterId, validate_key};

/// In-process store. Cloning shares the data and the writer id; use
/// [`MemoryStore::handle`] for a second writer (e.g. a second window).
#[derive(Clone)]
pub struct MemoryStore {
    data: Arc<Mutex<HashMap<String, String>>>,
    feed: ChangeFeed,
    writer: WriterId,
}

impl MemoryStore {
    pub fn new() -> Self {
        let feed = ChangeFeed::new();
        let writer = feed.register();
        Self {
            data: Arc::new(Mutex::new(HashMap::new())),
            feed,
            writer,
        }
    }

    /// Another handle onto the same data with its own writer id.
    pub fn handle(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            feed: self.feed.clone(),
            writer: self.feed.register(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let data = self.data.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        {
            let mut data = self.data.lock().map_err(|_| StorageError::Poisoned)?;
            data.insert(key.to_string(), value.to_string());
        }
        self.feed.publish(key, self.writer);
        Ok(())
    }

    fn writer_id(&self) -> WriterId {
        self.writer
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.feed.subscribe()
    }
}
