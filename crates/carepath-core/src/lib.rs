//! carepath-core
//!
//! Pure domain types and storage key conventions.
//! The shared vocabulary of the CarePath system. No I/O.

pub mod error;
pub mod models;
pub mod storage_keys;
