use serde::{Deserialize, Serialize};

/// Document styling for prescription exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Georgia", "Times New Roman").
    pub body_font: String,

    /// Font for the clinic banner and section headings.
    pub heading_font: String,

    /// Sizes in points.
    pub body_size: usize,
    pub title_size: usize,
    pub section_size: usize,
    pub subsection_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Georgia".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            title_size: 20,
            section_size: 14,
            subsection_size: 12,
        }
    }
}
