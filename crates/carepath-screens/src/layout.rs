use serde::{Deserialize, Serialize};
use ts_rs::TS;

use carepath_core::models::selection::{Cardinality, Selection};

/// One selectable option within a section.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreenOption {
    /// Display text.
    pub label: String,
    /// Identity stored in the selection state.
    pub value: String,
    /// Pre-selected when the screen is first activated.
    pub recommended: bool,
}

/// A labeled group of options addressed by `category`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub title: String,
    /// Unique within a screen.
    pub category: String,
    pub cardinality: Cardinality,
    pub options: Vec<ScreenOption>,
}

impl Section {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Default selection for a first visit.
    ///
    /// Single sections take the first recommended option, or the first
    /// declared option when none is recommended. Multiple sections take
    /// every recommended option, possibly none. A single section with no
    /// options has no default.
    pub fn default_selection(&self) -> Option<Selection> {
        let mut recommended = self
            .options
            .iter()
            .filter(|o| o.recommended)
            .map(|o| o.value.clone());

        match self.cardinality {
            Cardinality::Single => recommended
                .next()
                .or_else(|| self.options.first().map(|o| o.value.clone()))
                .map(Selection::Single),
            Cardinality::Multiple => Some(Selection::Multiple(recommended.collect())),
        }
    }
}

pub(crate) fn single(title: &str, category: &str, options: Vec<ScreenOption>) -> Section {
    section(title, category, Cardinality::Single, options)
}

pub(crate) fn multiple(title: &str, category: &str, options: Vec<ScreenOption>) -> Section {
    section(title, category, Cardinality::Multiple, options)
}

fn section(
    title: &str,
    category: &str,
    cardinality: Cardinality,
    options: Vec<ScreenOption>,
) -> Section {
    Section {
        title: title.to_string(),
        category: category.to_string(),
        cardinality,
        options,
    }
}

pub(crate) fn option(label: &str, value: &str) -> ScreenOption {
    ScreenOption {
        label: label.to_string(),
        value: value.to_string(),
        recommended: false,
    }
}

pub(crate) fn recommended(label: &str, value: &str) -> ScreenOption {
    ScreenOption {
        recommended: true,
        ..option(label, value)
    }
}
