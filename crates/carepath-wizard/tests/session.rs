use carepath_core::models::role::Role;
use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::GlobalSelectionState;
use carepath_core::storage_keys;
use carepath_export::compose::{PLACEHOLDER, PrescriptionDetails};
use carepath_screens::error::ScreenError;
use carepath_storage::memory::MemoryStore;
use carepath_storage::state::load_state;
use carepath_wizard::error::WizardError;
use carepath_wizard::sequencer::Step;
use carepath_wizard::session::{Session, View};

fn issued() -> jiff::Zoned {
    "2026-03-05T10:30:00[UTC]".parse().unwrap()
}

fn psychologist() -> Session<MemoryStore> {
    let mut session = Session::open(MemoryStore::new());
    session.select_role(Role::Psychologist);
    session
}

#[test]
fn opens_on_role_select() {
    let session = Session::open(MemoryStore::new());
    assert_eq!(session.view(), &View::RoleSelect);
    assert_eq!(session.role(), Role::None);
    assert!(session.archive().is_empty());
}

#[test]
fn wizard_needs_a_role() {
    let mut session = Session::open(MemoryStore::new());
    assert!(matches!(session.start_wizard(), Err(WizardError::NoRole)));
    assert!(matches!(
        session.open_screen(ScreenId::Detox),
        Err(WizardError::NoRole)
    ));
}

#[test]
fn default_sound_session_flows_into_combined_document() {
    let mut session = psychologist();
    assert_eq!(session.start_wizard().unwrap(), ScreenId::SoundTherapy);
    assert_eq!(session.synthesize().unwrap(), "Sound protocol: 20 min @ 432 Hz daily.");

    let finalized = session.finalize().unwrap();
    assert_eq!(finalized.entry.content, "Sound protocol: 20 min @ 432 Hz daily.");
    assert_eq!(finalized.entry.title, "SOUND THERAPY PRESCRIPTION");
    assert_eq!(finalized.entry.screen, Some(ScreenId::SoundTherapy));
    assert_eq!(finalized.step, Some(Step::Next(ScreenId::Ayurvedic)));
    assert_eq!(session.view(), &View::Screen(ScreenId::Ayurvedic));
    assert_eq!(session.progress(), Some((2, 6)));

    let doc = session.combined_document(&PrescriptionDetails::default(), &issued());
    assert_eq!(doc.section("II").unwrap().field("supplement"), Some(PLACEHOLDER));

    let finalized = session.finalize().unwrap();
    assert_eq!(finalized.entry.content, "Ayurvedic support: Ashwagandha 300mg daily.");
    assert_eq!(finalized.step, Some(Step::Next(ScreenId::Behavioral)));

    let doc = session.combined_document(&PrescriptionDetails::default(), &issued());
    let section = doc.section("I").unwrap();
    assert_eq!(section.field("frequency"), Some("432 Hz"));
    assert_eq!(section.field("duration"), Some("20 min"));
    let section = doc.section("II").unwrap();
    assert_eq!(section.field("supplement"), Some("Ashwagandha"));
    assert_eq!(section.field("dosage"), Some("300mg"));
    assert_eq!(doc.section("III").unwrap().field("core"), Some(PLACEHOLDER));
}

#[test]
fn free_navigation_keeps_the_wizard_cursor() {
    let mut session = psychologist();
    session.start_wizard().unwrap();
    session.finalize().unwrap();
    assert_eq!(session.sequencer().cursor(), Some(1));

    session.open_screen(ScreenId::Detox).unwrap();
    assert_eq!(session.sequencer().cursor(), Some(1));
    assert_eq!(session.progress(), None);

    let finalized = session.finalize().unwrap();
    assert_eq!(finalized.step, None);
    assert_eq!(finalized.entry.screen, Some(ScreenId::Detox));
    assert_eq!(session.sequencer().cursor(), Some(1));
    assert_eq!(session.view(), &View::Screen(ScreenId::Detox));

    // Back on the wizard's screen, the sequence resumes.
    session.open_screen(ScreenId::Ayurvedic).unwrap();
    assert_eq!(session.progress(), Some((2, 6)));
    let finalized = session.finalize().unwrap();
    assert_eq!(finalized.step, Some(Step::Next(ScreenId::Behavioral)));
    assert_eq!(session.sequencer().cursor(), Some(2));
}

#[test]
fn entry_snapshots_global_state_with_current_screen() {
    let mut session = psychologist();
    session.open_screen(ScreenId::Ayurvedic).unwrap();
    session.select("dosage", "600mg").unwrap();
    session.open_screen(ScreenId::SoundTherapy).unwrap();
    session.select("frequency", "528 Hz").unwrap();

    let finalized = session.finalize().unwrap();
    let snapshot = &finalized.entry.selections;
    assert_eq!(
        snapshot.get(ScreenId::SoundTherapy).and_then(|s| s.single("frequency")),
        Some("528 Hz")
    );
    assert_eq!(
        snapshot.get(ScreenId::Ayurvedic).and_then(|s| s.single("dosage")),
        Some("600mg")
    );
    assert_eq!(finalized.step, None);
    assert_eq!(session.view(), &View::Screen(ScreenId::SoundTherapy));
}

#[test]
fn finishing_the_last_screen_opens_the_archive() {
    let mut session = psychologist();
    session.start_wizard().unwrap();
    for _ in 0..5 {
        assert!(matches!(session.finalize().unwrap().step, Some(Step::Next(_))));
    }
    let last = session.finalize().unwrap();
    assert_eq!(last.step, Some(Step::Complete));
    assert_eq!(session.view(), &View::Archive { selected: None });
    assert!(!session.sequencer().is_active());
    assert_eq!(session.archive().len(), 6);
    assert_eq!(session.selected_entry().map(|e| &e.id), Some(&last.entry.id));

    let ids: Vec<u64> = session
        .archive()
        .entries()
        .iter()
        .map(|e| e.id.parse().unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn selections_survive_a_new_session() {
    let store = MemoryStore::new();
    let mut session = Session::open(store.handle());
    session.select_role(Role::Psychologist);
    session.open_screen(ScreenId::Behavioral).unwrap();
    session.select("core", "Gratitude").unwrap();
    drop(session);

    let mut reopened = Session::open(store);
    reopened.select_role(Role::Psychologist);
    let state = reopened.open_screen(ScreenId::Behavioral).unwrap();
    assert_eq!(state.single("core"), Some("Gratitude"));
}

#[test]
fn rejected_toggles_leave_state_untouched() {
    let mut session = psychologist();
    session.open_screen(ScreenId::SoundTherapy).unwrap();
    let before = session.current_selections().cloned();

    assert!(matches!(
        session.select("tempo", "fast"),
        Err(WizardError::Rejected(ScreenError::UnknownCategory { .. }))
    ));
    assert!(matches!(
        session.select("frequency", "999 Hz"),
        Err(WizardError::Rejected(ScreenError::UnknownOption { .. }))
    ));
    assert_eq!(session.current_selections().cloned(), before);

    session.select_role(Role::Psychiatrist);
    session.start_wizard().unwrap();
    assert_eq!(session.active_screen(), Some(ScreenId::PsychPlanView));
    assert!(matches!(
        session.select("anything", "x"),
        Err(WizardError::Rejected(ScreenError::ReadOnly(_)))
    ));
}

#[test]
fn toggling_persists_whole_state() {
    let mut session = psychologist();
    session.open_screen(ScreenId::Detox).unwrap();
    session.open_screen(ScreenId::SoundTherapy).unwrap();
    session.select("duration", "30 min").unwrap();

    let stored: GlobalSelectionState = load_state(session.store(), storage_keys::GLOBAL_SELECTIONS)
        .unwrap()
        .unwrap();
    assert!(stored.get(ScreenId::Detox).is_some());
    assert_eq!(
        stored.get(ScreenId::SoundTherapy).and_then(|s| s.single("duration")),
        Some("30 min")
    );
}

#[test]
fn select_without_active_screen_fails() {
    let mut session = psychologist();
    assert!(matches!(
        session.select("frequency", "432 Hz"),
        Err(WizardError::NoActiveScreen)
    ));
    assert!(matches!(session.finalize(), Err(WizardError::NoActiveScreen)));
}

#[test]
fn switching_role_abandons_the_wizard() {
    let mut session = psychologist();
    session.start_wizard().unwrap();
    session.reset_role();
    assert_eq!(session.view(), &View::RoleSelect);
    assert!(!session.sequencer().is_active());
    assert_eq!(session.active_screen(), None);
}

#[test]
fn dashboard_shows_three_most_recent_for_role() {
    let mut session = psychologist();
    session.start_wizard().unwrap();
    for _ in 0..4 {
        session.finalize().unwrap();
    }
    session.back_to_dashboard();
    assert_eq!(session.view(), &View::Dashboard);

    let recent = session.recent_entries();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].id, session.archive().entries()[0].id);

    session.select_role(Role::Psychiatrist);
    assert!(session.recent_entries().is_empty());
}

#[test]
fn archive_view_selects_requested_entry() {
    let mut session = psychologist();
    session.open_screen(ScreenId::Detox).unwrap();
    let first = session.finalize().unwrap().entry;
    session.finalize().unwrap();

    session.open_archive(Some(first.id.clone()));
    assert_eq!(session.selected_entry().map(|e| &e.id), Some(&first.id));

    session.open_archive(Some("missing".to_string()));
    assert_eq!(
        session.selected_entry().map(|e| &e.id),
        Some(&session.archive().entries()[0].id)
    );
}

#[test]
fn archive_written_elsewhere_is_picked_up() {
    let store = MemoryStore::new();
    let mut watcher = Session::open(store.handle());
    let mut writer = Session::open(store.handle());

    writer.select_role(Role::Psychologist);
    writer.open_screen(ScreenId::SoundTherapy).unwrap();
    writer.finalize().unwrap();

    assert!(writer.archive().len() == 1);
    assert!(!writer.poll_storage_changes());
    assert!(watcher.archive().is_empty());
    assert!(watcher.poll_storage_changes());
    assert_eq!(watcher.archive().len(), 1);
    assert!(!watcher.poll_storage_changes());
}
