//! carepath-desktop library root.
//!
//! Exposes the command layer, config and shared state so integration
//! tests can drive the application without a window.

pub mod commands;
pub mod config;
pub mod generator;
pub mod state;
