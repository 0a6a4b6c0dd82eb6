use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::{Section, option, recommended, single};

/// Prosocial behavioral prescription.
pub struct Behavioral;

impl Screen for Behavioral {
    fn id(&self) -> Option<ScreenId> {
        Some(ScreenId::Behavioral)
    }

    fn title(&self) -> &str {
        "BEHAVIORAL WELLNESS"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                single(
                    "Prosocial Intervention",
                    "core",
                    vec![
                        recommended("Random Acts of Kindness", "Kindness"),
                        option("Gratitude Practice", "Gratitude"),
                    ],
                ),
                single(
                    "Frequency",
                    "frequency",
                    vec![
                        recommended("2 hours/month", "2hrs"),
                        option("Weekly engagement", "weekly"),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn synthesize(&self, selections: &SelectionState) -> String {
        format!(
            "Behavioral focus: {} intervention, targeted {}.",
            selections.single("core").unwrap_or("Kindness"),
            selections.single("frequency").unwrap_or("2 hrs/month"),
        )
    }
}
