//! carepath-wizard
//!
//! The selection-state engine: per-screen selections, the role-specific
//! screen sequence, the append-only archive, and the [`session::Session`]
//! context every operation runs against.

pub mod archive;
pub mod error;
pub mod selection;
pub mod sequencer;
pub mod session;
