use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::{Section, multiple, option, recommended};

/// Session-specific CBT/DBT homework assignments.
///
/// Exposure and DBT work carry no recommended options: they are opted into
/// per patient rather than assigned by default.
pub struct CbtHomework;

impl Screen for CbtHomework {
    fn id(&self) -> Option<ScreenId> {
        Some(ScreenId::CbtHomework)
    }

    fn title(&self) -> &str {
        "THERAPEUTIC HOMEWORK"
    }

    fn instructions(&self) -> Option<&str> {
        Some("Session-Specific Assignments for Cognitive & Behavioral Growth.")
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                multiple(
                    "Cognitive Restructuring",
                    "cognitive",
                    vec![
                        recommended("Thought record (3 neg. thoughts/day)", "Thought Record"),
                        recommended("Evidence for/against each thought", "Evidence Log"),
                        recommended("Reframe to balanced thought", "Balanced Reframe"),
                    ],
                ),
                multiple(
                    "Behavioral Activation",
                    "activation",
                    vec![
                        recommended(
                            "Schedule 3 pleasant activities this week",
                            "Schedule Activities",
                        ),
                        recommended("Rate mood before/after each activity", "Mood Rating"),
                        recommended(
                            "Track on calendar (bring to next session)",
                            "Calendar Tracking",
                        ),
                    ],
                ),
                multiple(
                    "Mindfulness Practice",
                    "mindfulness",
                    vec![
                        recommended(
                            "10 minutes daily mindfulness (Calm, Headspace)",
                            "Daily Mindfulness",
                        ),
                        recommended("Body scan meditation 3x/week", "Body Scan"),
                        recommended("Mindful eating 1 meal/day", "Mindful Eating"),
                    ],
                ),
                multiple(
                    "Exposure Hierarchy",
                    "exposure",
                    vec![
                        option("List feared situations (0-100 scale)", "Hierarchy List"),
                        option("Practice easiest one this week", "Exposure Practice"),
                        option("Document: anxiety pre/during/post", "Exposure Log"),
                    ],
                ),
                multiple(
                    "DBT Skills",
                    "dbt",
                    vec![
                        option("TIPP skill practice (when distressed)", "TIPP Skills"),
                        option("Opposite action (urge management)", "Opposite Action"),
                        option("Radical acceptance worksheet", "Radical Acceptance"),
                    ],
                ),
                multiple(
                    "Reading & Resources",
                    "reading",
                    vec![
                        recommended(
                            "Read: Ch 3 of \"Feeling Good\" (Burns)",
                            "Feeling Good Reading",
                        ),
                        recommended("Watch: Dr. K video on anxiety", "Anxiety Video"),
                        recommended("Listen: Huberman Lab on sleep", "Sleep Podcast"),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn synthesize(&self, selections: &SelectionState) -> String {
        let mut assigned = String::new();
        for (category, name) in [
            ("cognitive", "Cognitive Restructuring"),
            ("activation", "Behavioral Activation"),
            ("mindfulness", "Mindfulness Exercises"),
        ] {
            if !selections.values(category).is_empty() {
                assigned.push_str(name);
                assigned.push_str(", ");
            }
        }
        format!(
            "Prescribed Homework: {assigned}and Reading: {}.",
            selections
                .joined("reading", ", ")
                .unwrap_or_else(|| "N/A".to_string()),
        )
    }
}
