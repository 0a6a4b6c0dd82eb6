use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::{Section, multiple, option, recommended, single};

/// Digital hygiene boundaries for evening and morning.
pub struct DigitalDetox;

impl Screen for DigitalDetox {
    fn id(&self) -> Option<ScreenId> {
        Some(ScreenId::Detox)
    }

    fn title(&self) -> &str {
        "DIGITAL DETOX PROTOCOL"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                multiple(
                    "Evening Protocol",
                    "evening",
                    vec![
                        recommended("Phone off by 9 PM", "9PM Off"),
                        recommended("No screens 1hr pre-bed", "No screens"),
                    ],
                ),
                single(
                    "Morning Constraints",
                    "morning",
                    vec![
                        recommended("Routine First (No Phone)", "Routine first"),
                        option("No SM before 10 AM", "No 10AM SM"),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn synthesize(&self, selections: &SelectionState) -> String {
        format!(
            "Digital detox boundaries: {} and {}.",
            selections
                .joined("evening", " & ")
                .unwrap_or_else(|| "Evening constraints".to_string()),
            selections.single("morning").unwrap_or("Morning protocol"),
        )
    }
}
