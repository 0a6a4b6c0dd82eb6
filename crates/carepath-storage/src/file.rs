use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::broadcast;

use crate::error::StorageError;
use crate::store::{ChangeFeed, KeyValueStore, StorageChange, WriterId, validate_key};

/// One JSON file per key inside a data directory.
///
/// Change announcements reach handles created from the same `FileStore`
/// (see [`FileStore::handle`]); writes by other processes are not observed.
#[derive(Clone)]
pub struct FileStore {
    dir: PathBuf,
    feed: ChangeFeed,
    writer: WriterId,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        let feed = ChangeFeed::new();
        let writer = feed.register();
        tracing::debug!(dir = %dir.display(), "file store opened");
        Ok(Self { dir, feed, writer })
    }

    pub fn handle(&self) -> Self {
        Self {
            dir: self.dir.clone(),
            feed: self.feed.clone(),
            writer: self.feed.register(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let path = self.path_for(key);

        // Write to a temp file then rename for atomicity
        let tmp_path = path.with_extension("json.tmp");
        if let Err(e) = write_then_rename(&tmp_path, &path, value) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        tracing::debug!(path = %path.display(), bytes = value.len(), "value written");

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

fn write_then_rename(tmp_path: &Path, path: &Path, value: &str) -> std::io::Result<()> {
    std::fs::write(tmp_path, value.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(tmp_path, path)
}
