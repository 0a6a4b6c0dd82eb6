//! carepath-bedrock
//!
//! Wellness-plan drafting through the Bedrock Converse API.

pub mod error;
pub mod generate;
pub mod prompt;
