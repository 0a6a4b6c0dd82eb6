use std::collections::BTreeMap;

use carepath_core::models::entry::ArchiveEntry;
use carepath_core::models::role::Role;
use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::{GlobalSelectionState, Selection, SelectionState};
use carepath_export::compose::{PLACEHOLDER, PrescriptionDetails, compose, extract};
use carepath_export::docx::generate_docx;
use carepath_export::output::{export_file_name, write_export};
use carepath_export::render::{render_prescription, render_template};
use carepath_export::styles::DocumentStyles;

fn issued() -> jiff::Zoned {
    "2026-03-05T10:30:00[UTC]".parse().unwrap()
}

fn entry(id: &str, screen: ScreenId, state: SelectionState) -> ArchiveEntry {
    let mut selections = GlobalSelectionState::new();
    selections.set(screen, state);
    ArchiveEntry {
        id: id.to_string(),
        title: format!("{screen} entry"),
        content: String::new(),
        role: Role::Psychologist,
        timestamp: jiff::Timestamp::UNIX_EPOCH,
        screen: Some(screen),
        selections,
    }
}

fn sound(frequency: &str, duration: &str) -> SelectionState {
    [
        ("frequency".to_string(), Selection::Single(frequency.to_string())),
        ("duration".to_string(), Selection::Single(duration.to_string())),
    ]
    .into_iter()
    .collect()
}

fn details() -> PrescriptionDetails {
    PrescriptionDetails {
        patient_name: "Jane Doe".to_string(),
        clinician_name: "Rao".to_string(),
        clinic_name: String::new(),
    }
}

#[test]
fn empty_archive_yields_six_placeholder_sections() {
    let doc = compose(&BTreeMap::new(), &details(), &issued());

    assert_eq!(doc.sections.len(), 6);
    let numerals: Vec<&str> = doc.sections.iter().map(|s| s.numeral.as_str()).collect();
    assert_eq!(numerals, ["I", "II", "III", "IV", "V", "VI"]);
    for section in &doc.sections {
        assert!(!section.fields.is_empty());
        assert!(section.fields.iter().all(|f| f.value == PLACEHOLDER));
    }
}

#[test]
fn latest_entry_supplies_section_values() {
    let entry = entry("1", ScreenId::SoundTherapy, sound("528 Hz", "30 min"));
    let latest = BTreeMap::from([(ScreenId::SoundTherapy, &entry)]);

    let doc = compose(&latest, &details(), &issued());
    let section = doc.section("I").unwrap();
    assert_eq!(section.field("frequency"), Some("528 Hz"));
    assert_eq!(section.field("duration"), Some("30 min"));
    assert!(section.body.contains("528 Hz"));
    assert!(section.body.contains("30 min"));
    assert_eq!(doc.section("II").unwrap().field("supplement"), Some(PLACEHOLDER));
}

#[test]
fn multi_values_join_with_comma() {
    let state: SelectionState = [(
        "daily_metrics".to_string(),
        Selection::Multiple(vec!["Mood".to_string(), "Sleep".to_string()]),
    )]
    .into_iter()
    .collect();
    let entry = entry("1", ScreenId::DailyMoodTracking, state);
    let latest = BTreeMap::from([(ScreenId::DailyMoodTracking, &entry)]);

    assert_eq!(
        extract(&latest, ScreenId::DailyMoodTracking, "daily_metrics"),
        "Mood, Sleep"
    );
    assert_eq!(extract(&latest, ScreenId::DailyMoodTracking, "method"), PLACEHOLDER);
}

#[test]
fn empty_multi_selection_reads_as_placeholder() {
    let state: SelectionState = [("cognitive".to_string(), Selection::Multiple(Vec::new()))]
        .into_iter()
        .collect();
    let entry = entry("1", ScreenId::CbtHomework, state);
    let latest = BTreeMap::from([(ScreenId::CbtHomework, &entry)]);

    assert_eq!(extract(&latest, ScreenId::CbtHomework, "cognitive"), PLACEHOLDER);
}

#[test]
fn header_placeholders_for_blank_details() {
    let doc = compose(&BTreeMap::new(), &PrescriptionDetails::default(), &issued());
    assert_eq!(doc.patient_name, "[Unnamed Patient]");
    assert_eq!(doc.clinician, "[Clinician]");
    assert_eq!(doc.clinic_name, "Clinic of Psychotherapy");

    let doc = compose(&BTreeMap::new(), &details(), &issued());
    assert_eq!(doc.patient_name, "Jane Doe");
    assert_eq!(doc.clinician, "Dr. Rao");
    assert_eq!(doc.date, "March 5, 2026");
    assert!(doc.reference.starts_with("RX-"));
}

#[test]
fn rendered_prescription_lists_every_section() {
    let entry = entry("1", ScreenId::SoundTherapy, sound("432 Hz", "20 min"));
    let latest = BTreeMap::from([(ScreenId::SoundTherapy, &entry)]);
    let doc = compose(&latest, &details(), &issued());

    let text = render_prescription(&doc).unwrap();
    assert!(text.starts_with("# Clinic of Psychotherapy"));
    assert!(text.contains("**Patient Name:** Jane Doe"));
    assert!(text.contains("### I. Neuro-Acoustic Stimulation"));
    assert!(text.contains("### VI. Objective Data Tracking"));
    assert!(text.contains("432 Hz"));
    assert!(text.contains("THIS DOCUMENT IS FOR THERAPEUTIC GUIDANCE ONLY."));
}

#[test]
fn render_template_reports_parse_errors() {
    let err = render_template("broken", "{% for %}", &serde_json::json!({})).unwrap_err();
    assert!(err.to_string().contains("template parse error"));
}

#[test]
fn docx_is_a_zip_package() {
    let doc = compose(&BTreeMap::new(), &details(), &issued());
    let text = render_prescription(&doc).unwrap();
    let bytes = generate_docx(&text, &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn file_names_follow_patient() {
    assert_eq!(export_file_name("Jane  Q Doe", "docx"), "Prescription_Jane_Q_Doe.docx");
    assert_eq!(export_file_name("  ", "pdf"), "Prescription_Patient.pdf");
    assert_eq!(export_file_name("a/b", "txt"), "Prescription_a_b.txt");
}

#[test]
fn write_export_leaves_only_the_final_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_export(dir.path(), "Prescription_Jane.txt", b"hello").unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("Prescription_Jane.txt")]);
}

#[test]
fn write_export_rejects_paths() {
    let dir = tempfile::tempdir().unwrap();
    assert!(write_export(dir.path(), "../escape.txt", b"x").is_err());
    assert!(write_export(dir.path(), "", b"x").is_err());
}
