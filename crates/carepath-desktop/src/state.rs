use tokio::sync::Mutex;

use carepath_storage::file::FileStore;
use carepath_storage::store::KeyValueStore;
use carepath_wizard::session::Session;

use crate::config::CarepathConfig;
use crate::generator::GeneratorView;

pub struct DesktopState<S: KeyValueStore = FileStore> {
    pub config: CarepathConfig,
    pub session: Mutex<Session<S>>,
    pub generator: Mutex<GeneratorView>,
}

impl<S: KeyValueStore> DesktopState<S> {
    pub fn new(config: CarepathConfig, store: S) -> Self {
        Self {
            config,
            session: Mutex::new(Session::open(store)),
            generator: Mutex::new(GeneratorView::default()),
        }
    }
}

impl DesktopState<FileStore> {
    /// Open the file store in the configured data directory.
    pub fn from_config(config: CarepathConfig) -> eyre::Result<Self> {
        let dir = config.resolved_data_dir()?;
        let store = FileStore::open(&dir)
            .map_err(|e| eyre::eyre!("failed to open data directory {}: {e}", dir.display()))?;
        tracing::info!(dir = %store.dir().display(), "data store opened");
        Ok(Self::new(config, store))
    }
}
