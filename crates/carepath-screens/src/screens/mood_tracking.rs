use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::{Section, multiple, option, recommended, single};

pub struct DailyMoodTracking;

impl Screen for DailyMoodTracking {
    fn id(&self) -> Option<ScreenId> {
        Some(ScreenId::DailyMoodTracking)
    }

    fn title(&self) -> &str {
        "DAILY MOOD TRACKING"
    }

    fn instructions(&self) -> Option<&str> {
        Some("MOOD & PROGRESS TRACKING ADHERENCE (Section 6)")
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                single(
                    "Daily Recording Requirement",
                    "recording",
                    vec![recommended("Daily Mood Recording (Active)", "Active Recording")],
                ),
                single(
                    "Tracking Method",
                    "method",
                    vec![
                        recommended("MANS360 App (in-app journal)", "MANS360"),
                        option("Paper journal (bring to sessions)", "Paper Journal"),
                        option("Voice memos (records/reviews)", "Voice Memos"),
                    ],
                ),
                multiple(
                    "Daily Parameters",
                    "daily_metrics",
                    vec![
                        recommended("Mood (1-10 scale)", "Mood"),
                        recommended("Sleep hours", "Sleep"),
                        recommended("Medication/Supplement adherence", "Adherence"),
                        recommended("Exercise (yes/no, duration)", "Exercise"),
                        recommended("Acts of kindness completed", "Kindness"),
                        recommended("Digital detox compliance", "Digital Detox"),
                        recommended("Sound therapy completed", "Sound Therapy"),
                    ],
                ),
                multiple(
                    "Weekly Clinical Review",
                    "weekly_review",
                    vec![
                        recommended("Psychologist reviews in-session", "Psych Review"),
                        recommended("Patient identifies patterns", "Patient Patterns"),
                        recommended("Adjust wellness plan based on data", "Data Adjustment"),
                    ],
                ),
                multiple(
                    "AI Integration Flags",
                    "ai_flags",
                    vec![
                        recommended("AI flags: 3+ days consecutive low mood", "Low Mood Flag"),
                        recommended("AI flags: Skipped 5+ days tracking", "Gap Flag"),
                        recommended("AI flags: Non-adherence to plan", "Adherence Flag"),
                        recommended("AI generates weekly summary report", "Weekly Summary"),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn synthesize(&self, selections: &SelectionState) -> String {
        format!(
            "Daily monitoring via {} enabled for {} metrics. AI clinical oversight active for: {}.",
            selections.single("method").unwrap_or("app"),
            selections.values("daily_metrics").len(),
            selections
                .joined("ai_flags", ", ")
                .unwrap_or_else(|| "N/A".to_string()),
        )
    }
}
