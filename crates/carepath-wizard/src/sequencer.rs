use carepath_core::models::role::Role;
use carepath_core::models::screen_id::ScreenId;

use crate::error::WizardError;

/// Outcome of advancing the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The next screen in the sequence is now active.
    Next(ScreenId),
    /// The last screen was finished; the wizard is inactive again.
    Complete,
}

/// Cursor over a role's screen sequence.
///
/// `cursor == None` means no guided sequence is running (free navigation).
/// Only [`start`](Self::start), [`advance`](Self::advance) and
/// [`reset`](Self::reset) move the cursor.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    role: Role,
    cursor: Option<usize>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, role: Role) -> Result<ScreenId, WizardError> {
        let first = *role.sequence().first().ok_or(WizardError::NoRole)?;
        self.role = role;
        self.cursor = Some(0);
        Ok(first)
    }

    pub fn advance(&mut self) -> Step {
        let sequence = self.role.sequence();
        match self.cursor {
            Some(i) if i + 1 < sequence.len() => {
                self.cursor = Some(i + 1);
                Step::Next(sequence[i + 1])
            }
            _ => {
                self.cursor = None;
                Step::Complete
            }
        }
    }

    pub fn reset(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_active(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn active_screen(&self) -> Option<ScreenId> {
        self.cursor.and_then(|i| self.role.sequence().get(i).copied())
    }

    /// One-based phase and total, e.g. `(2, 6)`, while a sequence runs.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.cursor.map(|i| (i + 1, self.role.sequence().len()))
    }
}
