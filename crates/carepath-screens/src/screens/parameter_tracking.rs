use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::{Section, multiple, option, recommended, single};

/// Vital parameters and side-effect monitoring.
pub struct ParameterTracking;

impl Screen for ParameterTracking {
    fn id(&self) -> Option<ScreenId> {
        Some(ScreenId::ParameterTracking)
    }

    fn title(&self) -> &str {
        "PARAMETER TRACKING"
    }

    fn instructions(&self) -> Option<&str> {
        Some("VITAL PARAMETERS & SIDE EFFECT MONITORING (Section 4)")
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                multiple(
                    "Mood Metrics (Weekly)",
                    "mood_metrics",
                    vec![
                        recommended("PHQ-9 Score Tracking", "PHQ-9"),
                        recommended("GAD-7 Score Tracking", "GAD-7"),
                        recommended("Trend: Improving", "Improving"),
                        option("Trend: Stable", "Stable"),
                        option("Trend: Worsening", "Worsening"),
                    ],
                ),
                multiple(
                    "Side Effects (Patient Reported)",
                    "side_effects",
                    vec![
                        option("Nausea (0-10 scale)", "Nausea"),
                        option("Headache (0-10 scale)", "Headache"),
                        option("Insomnia (0-10 scale)", "Insomnia"),
                        option("Sexual dysfunction (0-10 scale)", "Sexual"),
                        recommended("Weight change: ___ kg", "Weight Monitor"),
                    ],
                ),
                multiple(
                    "Vital Parameters",
                    "vitals",
                    vec![
                        recommended("Blood Pressure Monitoring", "BP"),
                        recommended("Heart Rate Monitoring", "HR"),
                        recommended("Weight Tracking", "Weight"),
                    ],
                ),
                single(
                    "Clinical Global Impression",
                    "cgi",
                    vec![
                        option("CGI Severity: 1-2 (Mild)", "Mild"),
                        recommended("CGI Severity: 4 (Moderate)", "Moderate"),
                        option("CGI Severity: 6-7 (Severe)", "Severe"),
                    ],
                ),
            ]
        });
        &SECTIONS
    }

    fn synthesize(&self, selections: &SelectionState) -> String {
        let joined = |category: &str, fallback: &str| {
            selections
                .joined(category, ", ")
                .unwrap_or_else(|| fallback.to_string())
        };
        format!(
            "Weekly monitoring for {}. Side effects: {}. Vitals: {}. CGI Status: {}.",
            joined("mood_metrics", "N/A"),
            joined("side_effects", "Stable"),
            joined("vitals", "N/A"),
            selections.single("cgi").unwrap_or("Moderate"),
        )
    }
}
