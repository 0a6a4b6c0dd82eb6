use tracing::{debug, warn};

use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::{Cardinality, GlobalSelectionState, SelectionState};
use carepath_core::storage_keys;
use carepath_screens::Screen;
use carepath_storage::state::{load_state, save_state};
use carepath_storage::store::KeyValueStore;

/// Return a new state with `value` toggled in `category`.
///
/// See [`SelectionState::toggled`]; performs no catalog validation.
pub fn toggle(
    state: &SelectionState,
    category: &str,
    value: &str,
    cardinality: Cardinality,
) -> SelectionState {
    state.toggled(category, value, cardinality)
}

/// Saved state verbatim when present and non-empty, catalog defaults otherwise.
pub fn resolve(screen: &dyn Screen, saved: Option<&SelectionState>) -> SelectionState {
    match saved {
        Some(state) if !state.is_empty() => state.clone(),
        _ => screen.default_selections(),
    }
}

/// In-memory Global Selection State, mirrored to storage on every change.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    global: GlobalSelectionState,
}

impl SelectionStore {
    /// Load the persisted state. Unreadable or corrupt state counts as a
    /// first visit everywhere; defaults are always re-derivable.
    pub fn load(store: &(impl KeyValueStore + ?Sized)) -> Self {
        let loaded = load_state::<GlobalSelectionState>(store, storage_keys::GLOBAL_SELECTIONS);
        let global = match loaded {
            Ok(Some(global)) => {
                debug!("selection state loaded");
                global
            }
            Ok(None) => GlobalSelectionState::new(),
            Err(e) => {
                warn!(error = %e, "selection state unreadable, starting from defaults");
                GlobalSelectionState::new()
            }
        };
        Self { global }
    }

    pub fn global(&self) -> &GlobalSelectionState {
        &self.global
    }

    pub fn get(&self, screen: ScreenId) -> Option<&SelectionState> {
        self.global.get(screen)
    }

    /// Selections for a screen being activated.
    ///
    /// A first visit derives the defaults and persists them straight away,
    /// so every visited screen has a stored state.
    pub fn initialize(
        &mut self,
        store: &(impl KeyValueStore + ?Sized),
        id: ScreenId,
    ) -> SelectionState {
        let saved = self.global.get(id).filter(|s| !s.is_empty());
        if let Some(saved) = saved {
            return saved.clone();
        }
        let defaults = resolve(carepath_screens::screen(id), None);
        debug!(screen = %id, categories = defaults.len(), "defaults derived");
        self.persist(store, id, defaults.clone());
        defaults
    }

    /// Replace one screen's selections and rewrite the whole state.
    ///
    /// A failed write is logged; the in-memory state stays authoritative.
    pub fn persist(
        &mut self,
        store: &(impl KeyValueStore + ?Sized),
        id: ScreenId,
        state: SelectionState,
    ) {
        self.global.set(id, state);
        if let Err(e) = save_state(store, storage_keys::GLOBAL_SELECTIONS, &self.global) {
            warn!(error = %e, screen = %id, "failed to persist selection state");
        }
    }
}
