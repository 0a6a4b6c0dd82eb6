//! carepath-storage
//!
//! Durable key-value substrate. Values are whole JSON documents, rewritten
//! on every change; writes are announced to every handle on the same
//! substrate.

pub mod error;
pub mod file;
pub mod memory;
pub mod state;
pub mod store;
