//! Durable storage key conventions.
//!
//! Both keys hold a whole JSON document that is rewritten on every change.

/// Global Selection State: `ScreenId → SelectionState`.
pub const GLOBAL_SELECTIONS: &str = "global_clinical_state";

/// Archive log, newest entry first.
pub const ARCHIVE: &str = "wellness_plans";
