use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::role::Role;
use super::screen_id::ScreenId;
use super::selection::GlobalSelectionState;

/// A finalized screen outcome. Immutable once appended to the archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArchiveEntry {
    /// Millisecond creation time as a decimal string; increases with every
    /// append to the same archive.
    pub id: String,
    pub title: String,
    /// The synthesized sentence.
    pub content: String,
    pub role: Role,
    pub timestamp: jiff::Timestamp,
    /// Screen the entry was finalized on. Absent in archives written before
    /// entries recorded it; resolve those by title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen: Option<ScreenId>,
    /// Global Selection State at save time.
    #[serde(default)]
    pub selections: GlobalSelectionState,
}
