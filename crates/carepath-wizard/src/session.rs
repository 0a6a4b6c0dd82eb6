use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::{debug, info};

use carepath_core::models::entry::ArchiveEntry;
use carepath_core::models::role::Role;
use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::{GlobalSelectionState, SelectionState};
use carepath_core::storage_keys;
use carepath_export::compose::{CombinedDocument, PrescriptionDetails, compose};
use carepath_storage::store::{KeyValueStore, StorageChange};

use crate::archive::Archive;
use crate::error::WizardError;
use crate::selection::{self, SelectionStore};
use crate::sequencer::{Sequencer, Step};

/// Entries shown on the dashboard.
pub const RECENT_LIMIT: usize = 3;

/// Top-level view of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    RoleSelect,
    Dashboard,
    Screen(ScreenId),
    /// Archive browser; `selected` is the highlighted entry id.
    Archive { selected: Option<String> },
}

/// Result of finalizing the active screen.
#[derive(Debug, Clone)]
pub struct Finalized {
    pub entry: ArchiveEntry,
    /// Where the wizard went, or `None` when the screen was not its current step.
    pub step: Option<Step>,
}

#[derive(Debug, Clone)]
struct ActiveScreen {
    id: ScreenId,
    selections: SelectionState,
}

/// Everything the engine operates on, bound to one storage handle.
pub struct Session<S: KeyValueStore> {
    store: S,
    role: Role,
    view: View,
    sequencer: Sequencer,
    selections: SelectionStore,
    archive: Archive,
    active: Option<ActiveScreen>,
    changes: Receiver<StorageChange>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn open(store: S) -> Self {
        let changes = store.subscribe();
        let selections = SelectionStore::load(&store);
        let archive = Archive::load(&store);
        info!(entries = archive.len(), "session opened");
        Self {
            store,
            role: Role::None,
            view: View::RoleSelect,
            sequencer: Sequencer::new(),
            selections,
            archive,
            active: None,
            changes,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    pub fn selections(&self) -> &GlobalSelectionState {
        self.selections.global()
    }

    pub fn active_screen(&self) -> Option<ScreenId> {
        self.active.as_ref().map(|a| a.id)
    }

    pub fn current_selections(&self) -> Option<&SelectionState> {
        self.active.as_ref().map(|a| &a.selections)
    }

    /// One-based phase and total while the active screen is the wizard's
    /// current step.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.on_wizard_step()
            .then(|| self.sequencer.progress())
            .flatten()
    }

    fn on_wizard_step(&self) -> bool {
        let step = self.sequencer.active_screen();
        step.is_some() && step == self.active_screen()
    }

    /// Choose a role. Any running sequence is abandoned.
    pub fn select_role(&mut self, role: Role) {
        info!(%role, "role selected");
        self.role = role;
        self.sequencer.reset();
        self.active = None;
        let view = if role == Role::None {
            View::RoleSelect
        } else {
            View::Dashboard
        };
        self.set_view(view);
    }

    pub fn reset_role(&mut self) {
        self.select_role(Role::None);
    }

    pub fn start_wizard(&mut self) -> Result<ScreenId, WizardError> {
        let first = self.sequencer.start(self.role)?;
        info!(role = %self.role, screen = %first, "wizard started");
        self.activate(first);
        Ok(first)
    }

    /// Open a screen directly. The wizard cursor is left where it is;
    /// reopening the wizard's current screen resumes the sequence.
    pub fn open_screen(&mut self, id: ScreenId) -> Result<&SelectionState, WizardError> {
        if self.role == Role::None {
            return Err(WizardError::NoRole);
        }
        Ok(self.activate(id))
    }

    /// Toggle an option on the active screen and persist the result.
    pub fn select(&mut self, category: &str, value: &str) -> Result<&SelectionState, WizardError> {
        let active = self.active.as_mut().ok_or(WizardError::NoActiveScreen)?;
        let section = carepath_screens::screen(active.id).check_option(category, value)?;
        let next = selection::toggle(&active.selections, category, value, section.cardinality);
        debug!(screen = %active.id, category, value, "selection toggled");
        self.selections.persist(&self.store, active.id, next.clone());
        active.selections = next;
        Ok(&active.selections)
    }

    pub fn synthesize(&self) -> Result<String, WizardError> {
        let active = self.active.as_ref().ok_or(WizardError::NoActiveScreen)?;
        Ok(carepath_screens::screen(active.id).synthesize(&active.selections))
    }

    /// Archive the active screen's outcome and, when it is the wizard's
    /// current step, move to the next screen or finish.
    pub fn finalize(&mut self) -> Result<Finalized, WizardError> {
        if self.role == Role::None {
            return Err(WizardError::NoRole);
        }
        let active = self.active.as_ref().ok_or(WizardError::NoActiveScreen)?;
        let screen = carepath_screens::screen(active.id);
        let now = jiff::Timestamp::now();
        let entry = ArchiveEntry {
            id: self.archive.next_id(now),
            title: screen.title().to_string(),
            content: screen.synthesize(&active.selections),
            role: self.role,
            timestamp: now,
            screen: Some(active.id),
            selections: self
                .selections
                .global()
                .with_screen(active.id, active.selections.clone()),
        };
        self.archive.append(&self.store, entry.clone());

        let step = self.on_wizard_step().then(|| self.sequencer.advance());
        match step {
            Some(Step::Next(next)) => {
                self.activate(next);
            }
            Some(Step::Complete) => {
                info!(role = %self.role, "wizard complete");
                self.active = None;
                self.set_view(View::Archive { selected: None });
            }
            None => {}
        }
        Ok(Finalized { entry, step })
    }

    pub fn back_to_dashboard(&mut self) {
        self.sequencer.reset();
        self.active = None;
        self.set_view(View::Dashboard);
    }

    pub fn open_archive(&mut self, selected: Option<String>) {
        self.sequencer.reset();
        self.active = None;
        self.set_view(View::Archive { selected });
    }

    /// Entry highlighted in the archive view: the requested one when it
    /// exists, otherwise the newest.
    pub fn selected_entry(&self) -> Option<&ArchiveEntry> {
        let View::Archive { selected } = &self.view else {
            return None;
        };
        selected
            .as_deref()
            .and_then(|id| self.archive.by_id(id))
            .or_else(|| self.archive.entries().first())
    }

    /// Newest entries for the current role.
    pub fn recent_entries(&self) -> Vec<&ArchiveEntry> {
        self.archive.recent_by_role(self.role, RECENT_LIMIT)
    }

    /// Drain storage notifications; reload the archive if another writer
    /// changed it. Returns whether a reload happened.
    pub fn poll_storage_changes(&mut self) -> bool {
        let own = self.store.writer_id();
        let mut stale = false;
        loop {
            match self.changes.try_recv() {
                Ok(change) => {
                    stale |= change.key == storage_keys::ARCHIVE && change.writer != own;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "storage notifications lagged");
                    stale = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        if stale {
            self.archive = Archive::load(&self.store);
            info!(entries = self.archive.len(), "archive reloaded after external write");
        }
        stale
    }

    pub fn combined_document(
        &self,
        details: &PrescriptionDetails,
        issued: &jiff::Zoned,
    ) -> CombinedDocument {
        compose(&self.archive.latest_per_screen(), details, issued)
    }

    fn activate(&mut self, id: ScreenId) -> &SelectionState {
        let selections = self.selections.initialize(&self.store, id);
        debug!(screen = %id, "screen activated");
        self.set_view(View::Screen(id));
        &self
            .active
            .insert(ActiveScreen { id, selections })
            .selections
    }

    fn set_view(&mut self, view: View) {
        if self.view != view {
            self.archive = Archive::load(&self.store);
        }
        self.view = view;
    }
}
