use thiserror::Error;

use carepath_screens::error::ScreenError;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("no role selected")]
    NoRole,

    #[error("no screen is active")]
    NoActiveScreen,

    #[error("rejected selection: {0}")]
    Rejected(#[from] ScreenError),
}
