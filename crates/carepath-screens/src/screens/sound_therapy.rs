use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::{Section, option, recommended, single};

/// Sound therapy prescription: carrier frequency and daily listening time.
pub struct SoundTherapy;

impl Screen for SoundTherapy {
    fn id(&self) -> Option<ScreenId> {
        Some(ScreenId::SoundTherapy)
    }

    fn title(&self) -> &str {
        "SOUND THERAPY PRESCRIPTION"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                single(
                    "Frequency",
                    "frequency",
                    vec![
                        recommended("432 Hz - Stress Relief", "432 Hz"),
                        option("528 Hz - Healing", "528 Hz"),
                    ],
                ),
                single(
                    "Duration",
                    "duration",
                    vec![
                        recommended("20 min/day (Standard)", "20 min"),
                        option("30 min/day", "30 min"),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn synthesize(&self, selections: &SelectionState) -> String {
        format!(
            "Sound protocol: {} @ {} daily.",
            selections.single("duration").unwrap_or("20 min"),
            selections.single("frequency").unwrap_or("432 Hz"),
        )
    }
}
