use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::{Section, option, recommended, single};

/// Agent selection and titration schedule.
pub struct MedicationManagement;

impl Screen for MedicationManagement {
    fn id(&self) -> Option<ScreenId> {
        Some(ScreenId::MedicationPrescription)
    }

    fn title(&self) -> &str {
        "MEDICATION MANAGEMENT"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                single(
                    "Agent Selection",
                    "generic",
                    vec![
                        recommended("Sertraline (SSRI)", "Sertraline"),
                        option("Escitalopram (SSRI)", "Escitalopram"),
                    ],
                ),
                single(
                    "Dose Schedule",
                    "dose",
                    vec![
                        recommended("25mg → 50mg", "25-50"),
                        option("50mg → 100mg", "50-100"),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn synthesize(&self, selections: &SelectionState) -> String {
        format!(
            "Medication Plan: {} ({}).",
            selections.single("generic").unwrap_or("Sertraline"),
            selections.single("dose").unwrap_or("25-50mg"),
        )
    }
}
