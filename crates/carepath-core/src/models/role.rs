use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::screen_id::ScreenId;
use crate::error::CoreError;

/// Ordered wizard sequence for psychologists.
pub const PSYCHOLOGIST_SEQUENCE: [ScreenId; 6] = [
    ScreenId::SoundTherapy,
    ScreenId::Ayurvedic,
    ScreenId::Behavioral,
    ScreenId::Detox,
    ScreenId::CbtHomework,
    ScreenId::DailyMoodTracking,
];

/// Ordered wizard sequence for psychiatrists. Opens on the read-only
/// coordination review of the psychologist's foundation.
pub const PSYCHIATRIST_SEQUENCE: [ScreenId; 6] = [
    ScreenId::PsychPlanView,
    ScreenId::PsychiatricEvaluation,
    ScreenId::MedicationPrescription,
    ScreenId::ParameterTracking,
    ScreenId::DosageAdjustmentLog,
    ScreenId::FollowUpSchedule,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    /// No role chosen yet; the session is at role selection.
    #[default]
    None,
    Psychologist,
    Psychiatrist,
}

impl Role {
    /// The wizard sequence for this role. Empty for [`Role::None`].
    pub fn sequence(self) -> &'static [ScreenId] {
        match self {
            Role::None => &[],
            Role::Psychologist => &PSYCHOLOGIST_SEQUENCE,
            Role::Psychiatrist => &PSYCHIATRIST_SEQUENCE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::None => "none",
            Role::Psychologist => "psychologist",
            Role::Psychiatrist => "psychiatrist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Role::None),
            "psychologist" => Ok(Role::Psychologist),
            "psychiatrist" => Ok(Role::Psychiatrist),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}
