use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("screen '{screen}' has no section with category '{category}'")]
    UnknownCategory { screen: String, category: String },

    #[error("'{value}' is not an option of '{category}' on screen '{screen}'")]
    UnknownOption {
        screen: String,
        category: String,
        value: String,
    },

    #[error("screen '{0}' is read-only")]
    ReadOnly(String),
}
