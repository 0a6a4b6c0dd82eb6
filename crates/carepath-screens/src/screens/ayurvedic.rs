use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::{Section, option, recommended, single};

/// Ayurvedic/herbal supplement and dose.
pub struct Ayurvedic;

impl Screen for Ayurvedic {
    fn id(&self) -> Option<ScreenId> {
        Some(ScreenId::Ayurvedic)
    }

    fn title(&self) -> &str {
        "AYURVEDIC RECOMMENDATIONS"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                single(
                    "Supplement",
                    "supplement",
                    vec![
                        recommended("Ashwagandha", "Ashwagandha"),
                        option("Brahmi", "Brahmi"),
                    ],
                ),
                single(
                    "Dosage",
                    "dosage",
                    vec![
                        recommended("300mg (Standard)", "300mg"),
                        option("600mg", "600mg"),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn synthesize(&self, selections: &SelectionState) -> String {
        format!(
            "Ayurvedic support: {} {} daily.",
            selections.single("supplement").unwrap_or("Ashwagandha"),
            selections.single("dosage").unwrap_or("300mg"),
        )
    }
}
