use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::{Section, multiple, recommended};

pub const ACKNOWLEDGEMENT: &str = "Psychiatrist acknowledges existing wellness foundation. \
Clinical layers being added to established psychologist protocol.";

/// Coordinated care review: the psychiatrist's read-only view of the
/// psychologist's foundation layers. Summary only, never an input screen.
pub struct CoordinatedCareReview;

impl Screen for CoordinatedCareReview {
    fn id(&self) -> Option<ScreenId> {
        Some(ScreenId::PsychPlanView)
    }

    fn title(&self) -> &str {
        "COORDINATED CARE REVIEW"
    }

    fn instructions(&self) -> Option<&str> {
        Some("Review of Psychologist Foundation Layers.")
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![multiple(
                "Wellness Foundation",
                "review",
                vec![
                    recommended("Sound Therapy active", "s"),
                    recommended("Ayurvedic base active", "a"),
                    recommended("Digital detox active", "d"),
                ],
            )]
        });
        &SECTIONS
    }

    fn read_only(&self) -> bool {
        true
    }

    fn synthesize(&self, _selections: &SelectionState) -> String {
        ACKNOWLEDGEMENT.to_string()
    }
}
