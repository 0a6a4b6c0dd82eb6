//! carepath-screens
//!
//! Clinical screen definitions. Pure data, no storage dependency.
//! Defines the sections, options, recommended defaults and synthesis
//! sentence for every screen of the guided questionnaire.

pub mod error;
pub mod layout;
pub mod screens;

use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use error::ScreenError;
use layout::Section;

/// Trait implemented by each clinical screen.
pub trait Screen: Send + Sync {
    /// Identifier of this screen, `None` for the fallback module.
    fn id(&self) -> Option<ScreenId>;

    /// Heading shown on the screen and recorded as the archive entry title.
    fn title(&self) -> &str;

    fn instructions(&self) -> Option<&str> {
        None
    }

    /// The input sections, in display order.
    fn sections(&self) -> &[Section];

    /// Summary screens render their sections disabled and accept no input.
    fn read_only(&self) -> bool {
        false
    }

    /// Render the selections into the synthesis sentence.
    ///
    /// Must tolerate missing categories and never panic.
    fn synthesize(&self, selections: &SelectionState) -> String;

    fn section(&self, category: &str) -> Option<&Section> {
        self.sections().iter().find(|s| s.category == category)
    }

    /// Selections for a first visit, derived from the recommended options.
    fn default_selections(&self) -> SelectionState {
        self.sections()
            .iter()
            .filter_map(|s| s.default_selection().map(|sel| (s.category.clone(), sel)))
            .collect()
    }

    /// Check that `value` may be selected in `category` on this screen.
    fn check_option(&self, category: &str, value: &str) -> Result<&Section, ScreenError> {
        let key = self.id().map(|id| id.as_str()).unwrap_or(screens::fallback::KEY);
        if self.read_only() {
            return Err(ScreenError::ReadOnly(key.to_string()));
        }
        let section = self
            .section(category)
            .ok_or_else(|| ScreenError::UnknownCategory {
                screen: key.to_string(),
                category: category.to_string(),
            })?;
        if !section.has_option(value) {
            return Err(ScreenError::UnknownOption {
                screen: key.to_string(),
                category: category.to_string(),
                value: value.to_string(),
            });
        }
        Ok(section)
    }
}

/// Look up the screen for an identifier.
pub fn screen(id: ScreenId) -> &'static dyn Screen {
    match id {
        ScreenId::SoundTherapy => &screens::sound_therapy::SoundTherapy,
        ScreenId::Ayurvedic => &screens::ayurvedic::Ayurvedic,
        ScreenId::Behavioral => &screens::behavioral::Behavioral,
        ScreenId::Detox => &screens::detox::DigitalDetox,
        ScreenId::CbtHomework => &screens::cbt_homework::CbtHomework,
        ScreenId::DailyMoodTracking => &screens::mood_tracking::DailyMoodTracking,
        ScreenId::PsychPlanView => &screens::coordination::CoordinatedCareReview,
        ScreenId::PsychiatricEvaluation => &screens::evaluation::PsychiatricEvaluation,
        ScreenId::MedicationPrescription => &screens::medication::MedicationManagement,
        ScreenId::ParameterTracking => &screens::parameter_tracking::ParameterTracking,
        ScreenId::DosageAdjustmentLog => &screens::dosage_adjustment::DosageAdjustmentLog,
        ScreenId::FollowUpSchedule => &screens::follow_up::FollowUpSchedule,
    }
}

/// Look up a screen by its storage key. Unknown keys get the fallback module.
pub fn screen_by_key(key: &str) -> &'static dyn Screen {
    match key.parse::<ScreenId>() {
        Ok(id) => screen(id),
        Err(_) => &screens::fallback::ClinicalModule,
    }
}

/// Return all registered clinical screens.
pub fn all_screens() -> Vec<&'static dyn Screen> {
    ScreenId::ALL.into_iter().map(screen).collect()
}

/// Find the screen whose title is `title`.
pub fn screen_for_title(title: &str) -> Option<ScreenId> {
    ScreenId::ALL
        .into_iter()
        .find(|id| screen(*id).title() == title)
}
