use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use carepath_core::models::entry::ArchiveEntry;
use carepath_core::models::screen_id::ScreenId;

/// Field value used when the archive holds nothing for a category.
pub const PLACEHOLDER: &str = "N/A";

pub const DEFAULT_CLINIC_NAME: &str = "Clinic of Psychotherapy";
pub const DISCLAIMER: &str = "THIS DOCUMENT IS FOR THERAPEUTIC GUIDANCE ONLY.";

/// Who the prescription is for and who issues it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrescriptionDetails {
    pub patient_name: String,
    pub clinician_name: String,
    /// Falls back to [`DEFAULT_CLINIC_NAME`] when blank.
    #[serde(default)]
    pub clinic_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DocumentField {
    pub category: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DocumentSection {
    /// Roman numeral, "I" through "VI".
    pub numeral: String,
    pub heading: String,
    pub screen: ScreenId,
    pub fields: Vec<DocumentField>,
    /// The fields woven into the section's prose.
    pub body: String,
}

impl DocumentSection {
    pub fn field(&self, category: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.category == category)
            .map(|f| f.value.as_str())
    }
}

/// The single document assembled from the latest entry of each
/// therapeutic screen.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CombinedDocument {
    pub clinic_name: String,
    pub patient_name: String,
    pub clinician: String,
    pub date: String,
    pub reference: String,
    pub sections: Vec<DocumentSection>,
    pub disclaimer: String,
}

impl CombinedDocument {
    pub fn section(&self, numeral: &str) -> Option<&DocumentSection> {
        self.sections.iter().find(|s| s.numeral == numeral)
    }
}

struct SectionLayout {
    numeral: &'static str,
    heading: &'static str,
    screen: ScreenId,
    categories: &'static [&'static str],
    body: fn(&[String]) -> String,
}

static LAYOUT: [SectionLayout; 6] = [
    SectionLayout {
        numeral: "I",
        heading: "Neuro-Acoustic Stimulation",
        screen: ScreenId::SoundTherapy,
        categories: &["frequency", "duration"],
        body: |v| format!("Patient is to engage in {} sound therapy for {} daily.", v[0], v[1]),
    },
    SectionLayout {
        numeral: "II",
        heading: "Nutraceutical Support",
        screen: ScreenId::Ayurvedic,
        categories: &["supplement", "dosage"],
        body: |v| format!("Administration of {} at {} daily.", v[0], v[1]),
    },
    SectionLayout {
        numeral: "III",
        heading: "Behavioral Intervention",
        screen: ScreenId::Behavioral,
        categories: &["core", "frequency"],
        body: |v| format!("Prescribed behavior: {}. Frequency: {}.", v[0], v[1]),
    },
    SectionLayout {
        numeral: "IV",
        heading: "Digital Hygiene Protocol",
        screen: ScreenId::Detox,
        categories: &["evening", "morning"],
        body: |v| format!("Evening: {}. Morning: {}.", v[0], v[1]),
    },
    SectionLayout {
        numeral: "V",
        heading: "Clinical Homework",
        screen: ScreenId::CbtHomework,
        categories: &["cognitive", "activation", "reading"],
        body: |v| {
            format!(
                "Cognitive work: {}. Activation: {}. Reading: {}. Regular notation requested.",
                v[0], v[1], v[2]
            )
        },
    },
    SectionLayout {
        numeral: "VI",
        heading: "Objective Data Tracking",
        screen: ScreenId::DailyMoodTracking,
        categories: &["daily_metrics", "method"],
        body: |v| format!("Monitoring metrics: {} via {}.", v[0], v[1]),
    },
];

/// Value of `category` on `screen` as recorded by the latest entry for that
/// screen, multi-values joined with ", ". [`PLACEHOLDER`] when absent.
pub fn extract(
    latest: &BTreeMap<ScreenId, &ArchiveEntry>,
    screen: ScreenId,
    category: &str,
) -> String {
    latest
        .get(&screen)
        .and_then(|entry| entry.selections.get(screen))
        .and_then(|state| state.joined(category, ", "))
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Assemble the combined document.
///
/// `latest` maps each screen to its most recent archive entry. Every section
/// is always present; missing data reads as [`PLACEHOLDER`].
pub fn compose(
    latest: &BTreeMap<ScreenId, &ArchiveEntry>,
    details: &PrescriptionDetails,
    issued: &jiff::Zoned,
) -> CombinedDocument {
    let sections = LAYOUT
        .iter()
        .map(|layout| {
            let values: Vec<String> = layout
                .categories
                .iter()
                .map(|c| extract(latest, layout.screen, c))
                .collect();
            DocumentSection {
                numeral: layout.numeral.to_string(),
                heading: layout.heading.to_string(),
                screen: layout.screen,
                body: (layout.body)(&values),
                fields: layout
                    .categories
                    .iter()
                    .zip(values)
                    .map(|(c, value)| DocumentField {
                        category: c.to_string(),
                        value,
                    })
                    .collect(),
            }
        })
        .collect();

    CombinedDocument {
        clinic_name: or_else(&details.clinic_name, DEFAULT_CLINIC_NAME.to_string()),
        patient_name: or_else(&details.patient_name, "[Unnamed Patient]".to_string()),
        clinician: match details.clinician_name.trim() {
            "" => "[Clinician]".to_string(),
            name => format!("Dr. {name}"),
        },
        date: issued.strftime("%B %-d, %Y").to_string(),
        reference: format!(
            "RX-{:06}",
            issued.timestamp().as_millisecond().rem_euclid(1_000_000)
        ),
        sections,
        disclaimer: DISCLAIMER.to_string(),
    }
}

fn or_else(value: &str, fallback: String) -> String {
    match value.trim() {
        "" => fallback,
        v => v.to_string(),
    }
}
