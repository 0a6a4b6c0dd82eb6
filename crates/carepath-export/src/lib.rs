//! carepath-export
//!
//! Composes the combined prescription from the archive and renders it
//! through Tera into text or DOCX.

pub mod compose;
pub mod docx;
pub mod error;
pub mod output;
pub mod render;
pub mod styles;
