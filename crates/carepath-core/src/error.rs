use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),
}
