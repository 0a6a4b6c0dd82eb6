use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::broadcast;

use crate::error::StorageError;

/// Identifies one handle onto a store, so subscribers can tell their own
/// writes from writes made through other handles.
pub type WriterId = u64;

/// Announcement that `key` was rewritten through handle `writer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    pub key: String,
    pub writer: WriterId,
}

/// String-valued key-value storage that survives restarts.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. A missing key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key` and announce the change.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// The writer id stamped on changes made through this handle.
    fn writer_id(&self) -> WriterId;

    /// Receive changes made through any handle on the same substrate,
    /// including this one.
    fn subscribe(&self) -> broadcast::Receiver<StorageChange>;
}

const CHANGE_CAPACITY: usize = 64;

/// Change fan-out shared by every handle on one substrate.
#[derive(Clone)]
pub(crate) struct ChangeFeed {
    sender: broadcast::Sender<StorageChange>,
    next_writer: Arc<AtomicU64>,
}

impl ChangeFeed {
    pub(crate) fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANGE_CAPACITY);
        Self {
            sender,
            next_writer: Arc::new(AtomicU64::new(1)),
        }
    }

    pub(crate) fn register(&self) -> WriterId {
        self.next_writer.fetch_add(1, Ordering::Relaxed)
    }

    pub(crate) fn publish(&self, key: &str, writer: WriterId) {
        // No subscribers is fine.
        let _ = self.sender.send(StorageChange {
            key: key.to_string(),
            writer,
        });
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.sender.subscribe()
    }
}

/// Keys become file names, so keep them to a safe alphabet.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
