use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use carepath_core::models::entry::ArchiveEntry;
use carepath_core::models::role::Role;
use carepath_core::models::screen_id::ScreenId;
use carepath_core::storage_keys;
use carepath_storage::state::{load_state, save_state};
use carepath_storage::store::KeyValueStore;

/// Append-only log of finalized entries, newest first.
#[derive(Debug, Clone, Default)]
pub struct Archive {
    entries: Vec<ArchiveEntry>,
}

impl Archive {
    /// Load the persisted log; unreadable storage reads as an empty archive.
    pub fn load(store: &(impl KeyValueStore + ?Sized)) -> Self {
        let entries = match load_state::<Vec<ArchiveEntry>>(store, storage_keys::ARCHIVE) {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "archive unreadable, treating as empty");
                Vec::new()
            }
        };
        debug!(count = entries.len(), "archive loaded");
        Self { entries }
    }

    /// Build from an already newest-first log.
    pub fn from_entries(entries: Vec<ArchiveEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert at the head and rewrite the stored log.
    pub fn append(&mut self, store: &(impl KeyValueStore + ?Sized), entry: ArchiveEntry) {
        info!(id = %entry.id, title = %entry.title, role = %entry.role, "archive entry appended");
        self.entries.insert(0, entry);
        if let Err(e) = save_state(store, storage_keys::ARCHIVE, &self.entries) {
            warn!(error = %e, "failed to persist archive");
        }
    }

    /// Id for the next entry: the creation millisecond, bumped past the
    /// newest id so ids keep increasing within this archive.
    pub fn next_id(&self, now: jiff::Timestamp) -> String {
        let millis = u64::try_from(now.as_millisecond()).unwrap_or(0);
        let newest = self
            .entries
            .first()
            .and_then(|e| e.id.parse::<u64>().ok());
        let id = match newest {
            Some(newest) if newest >= millis => newest + 1,
            _ => millis,
        };
        id.to_string()
    }

    pub fn by_id(&self, id: &str) -> Option<&ArchiveEntry> {
        by_id(&self.entries, id)
    }

    pub fn recent_by_role(&self, role: Role, limit: usize) -> Vec<&ArchiveEntry> {
        recent_by_role(&self.entries, role, limit)
    }

    pub fn latest_per_title(&self) -> BTreeMap<&str, &ArchiveEntry> {
        latest_per_title(&self.entries)
    }

    pub fn latest_per_screen(&self) -> BTreeMap<ScreenId, &ArchiveEntry> {
        latest_per_screen(&self.entries)
    }
}

pub fn by_id<'a>(log: &'a [ArchiveEntry], id: &str) -> Option<&'a ArchiveEntry> {
    log.iter().find(|e| e.id == id)
}

/// Entries for `role`, newest first, at most `limit`.
pub fn recent_by_role(log: &[ArchiveEntry], role: Role, limit: usize) -> Vec<&ArchiveEntry> {
    log.iter().filter(|e| e.role == role).take(limit).collect()
}

/// Most recent entry per title. Walks oldest to newest so later entries win.
pub fn latest_per_title(log: &[ArchiveEntry]) -> BTreeMap<&str, &ArchiveEntry> {
    let mut latest = BTreeMap::new();
    for entry in log.iter().rev() {
        latest.insert(entry.title.as_str(), entry);
    }
    latest
}

/// Most recent entry per screen. Entries that predate the `screen` field are
/// placed by their title; entries matching no screen are skipped.
pub fn latest_per_screen(log: &[ArchiveEntry]) -> BTreeMap<ScreenId, &ArchiveEntry> {
    let mut latest = BTreeMap::new();
    for entry in log.iter().rev() {
        let screen = entry
            .screen
            .or_else(|| carepath_screens::screen_for_title(&entry.title));
        if let Some(screen) = screen {
            latest.insert(screen, entry);
        }
    }
    latest
}
