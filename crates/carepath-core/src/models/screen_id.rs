use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Stable identifier of a clinical screen.
///
/// The serialized form doubles as the key under which a screen's selections
/// are stored in the Global Selection State.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScreenId {
    // Psychologist
    SoundTherapy,
    Ayurvedic,
    Behavioral,
    Detox,
    CbtHomework,
    DailyMoodTracking,

    // Psychiatrist
    PsychPlanView,
    PsychiatricEvaluation,
    MedicationPrescription,
    ParameterTracking,
    DosageAdjustmentLog,
    FollowUpSchedule,
}

impl ScreenId {
    pub const ALL: [ScreenId; 12] = [
        ScreenId::SoundTherapy,
        ScreenId::Ayurvedic,
        ScreenId::Behavioral,
        ScreenId::Detox,
        ScreenId::CbtHomework,
        ScreenId::DailyMoodTracking,
        ScreenId::PsychPlanView,
        ScreenId::PsychiatricEvaluation,
        ScreenId::MedicationPrescription,
        ScreenId::ParameterTracking,
        ScreenId::DosageAdjustmentLog,
        ScreenId::FollowUpSchedule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::SoundTherapy => "sound_therapy",
            ScreenId::Ayurvedic => "ayurvedic",
            ScreenId::Behavioral => "behavioral",
            ScreenId::Detox => "detox",
            ScreenId::CbtHomework => "cbt_homework",
            ScreenId::DailyMoodTracking => "daily_mood_tracking",
            ScreenId::PsychPlanView => "psych_plan_view",
            ScreenId::PsychiatricEvaluation => "psychiatric_evaluation",
            ScreenId::MedicationPrescription => "medication_prescription",
            ScreenId::ParameterTracking => "parameter_tracking",
            ScreenId::DosageAdjustmentLog => "dosage_adjustment_log",
            ScreenId::FollowUpSchedule => "follow_up_schedule",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownScreen(s.to_string()))
    }
}
