use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::{Section, option, recommended, single};

pub struct FollowUpSchedule;

impl Screen for FollowUpSchedule {
    fn id(&self) -> Option<ScreenId> {
        Some(ScreenId::FollowUpSchedule)
    }

    fn title(&self) -> &str {
        "FOLLOW-UP SCHEDULE"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![single(
                "Next Session",
                "next",
                vec![
                    recommended("2 Weeks (Reassess Titration)", "2W"),
                    option("4 Weeks (Standard)", "4W"),
                    option("Maintenance (3 Months)", "3M"),
                ],
            )]
        });
        &SECTIONS
    }

    fn synthesize(&self, selections: &SelectionState) -> String {
        format!(
            "Follow-up scheduled for {}.",
            selections.single("next").unwrap_or("2 weeks"),
        )
    }
}
