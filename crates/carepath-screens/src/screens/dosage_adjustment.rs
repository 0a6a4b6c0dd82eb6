use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::{Section, multiple, option, recommended};

/// Medication adjustment history and taper schedule.
pub struct DosageAdjustmentLog;

impl Screen for DosageAdjustmentLog {
    fn id(&self) -> Option<ScreenId> {
        Some(ScreenId::DosageAdjustmentLog)
    }

    fn title(&self) -> &str {
        "DOSAGE ADJUSTMENT LOG"
    }

    fn instructions(&self) -> Option<&str> {
        Some("MEDICATION ADJUSTMENT HISTORY & TAPER SCHEDULE (Section 5)")
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                multiple(
                    "Medication History Log",
                    "history",
                    vec![
                        recommended("Dec 1: Sertraline 0mg → 50mg (Initial)", "Initial Start"),
                        recommended("Dec 15: Sertraline 50mg → 100mg (Tolerated)", "Dose Increase"),
                        recommended("Jan 5: Continue 100mg (Reassess)", "Maintenance"),
                    ],
                ),
                multiple(
                    "Taper Schedule (If discontinuing)",
                    "taper",
                    vec![
                        option("Week 1: 50% Reduction", "W1 Reduce"),
                        option("Week 2: 75% Reduction", "W2 Reduce"),
                        option("Week 3: Final Taper", "W3 Final"),
                        option("Week 4: Discontinue", "W4 Stop"),
                    ],
                ),
                multiple(
                    "Adjustment Notes",
                    "adjustment_notes",
                    vec![
                        recommended("Slow taper to avoid discontinuation syndrome", "Safety Note"),
                        recommended(
                            "Coordinate with psychologist during taper",
                            "Coordination Note",
                        ),
                        recommended("Continue therapy during titration", "Therapy Note"),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn synthesize(&self, selections: &SelectionState) -> String {
        format!(
            "Adjustment Log Update: {}. Notes: {}.",
            selections
                .joined("history", "; ")
                .unwrap_or_else(|| "No changes".to_string()),
            selections
                .joined("adjustment_notes", ", ")
                .unwrap_or_else(|| "Standard".to_string()),
        )
    }
}
