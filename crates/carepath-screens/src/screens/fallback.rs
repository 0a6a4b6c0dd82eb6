use carepath_core::models::screen_id::ScreenId;
use carepath_core::models::selection::SelectionState;

use crate::Screen;
use crate::layout::Section;

/// Storage key reported for the fallback module.
pub const KEY: &str = "clinical_module";

/// Placeholder returned for unknown screen keys: no sections, empty synthesis.
pub struct ClinicalModule;

impl Screen for ClinicalModule {
    fn id(&self) -> Option<ScreenId> {
        None
    }

    fn title(&self) -> &str {
        "CLINICAL MODULE"
    }

    fn sections(&self) -> &[Section] {
        &[]
    }

    fn synthesize(&self, _selections: &SelectionState) -> String {
        String::new()
    }
}
