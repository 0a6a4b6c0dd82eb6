use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::{Section, option, recommended, single};

pub struct PsychiatricEvaluation;

impl Screen for PsychiatricEvaluation {
    fn id(&self) -> Option<ScreenId> {
        Some(ScreenId::PsychiatricEvaluation)
    }

    fn title(&self) -> &str {
        "PSYCHIATRIC EVALUATION"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                single(
                    "Diagnosis (Standard)",
                    "diagnosis",
                    vec![
                        recommended("Major Depressive Disorder", "MDD"),
                        option("Generalized Anxiety Disorder", "GAD"),
                    ],
                ),
                single(
                    "Clinical Severity",
                    "severity",
                    vec![recommended("Moderate", "Moderate"), option("Severe", "Severe")],
                ),
            ]
        });
        &SECTIONS
    }

    fn synthesize(&self, selections: &SelectionState) -> String {
        format!(
            "Diagnosis: {}. Severity: {}.",
            selections.single("diagnosis").unwrap_or("MDD"),
            selections.single("severity").unwrap_or("Moderate"),
        )
    }
}
