use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::screen_id::ScreenId;

/// How many options a section accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Cardinality {
    Single,
    Multiple,
}

/// The chosen value(s) of one category.
///
/// Untagged so that the stored JSON is a plain string or array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Selection {
    Single(String),
    /// Insertion/toggle order, no duplicates.
    Multiple(Vec<String>),
}

impl Selection {
    pub fn values(&self) -> &[String] {
        match self {
            Selection::Single(value) => std::slice::from_ref(value),
            Selection::Multiple(values) => values,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values().iter().any(|v| v == value)
    }
}

/// Per-screen selections, keyed by section category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectionState(BTreeMap<String, Selection>);

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: &str) -> Option<&Selection> {
        self.0.get(category)
    }

    /// The value of a single-select category, if one is stored.
    pub fn single(&self, category: &str) -> Option<&str> {
        match self.0.get(category) {
            Some(Selection::Single(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// All stored values of a category; empty when absent.
    pub fn values(&self, category: &str) -> &[String] {
        self.0.get(category).map(Selection::values).unwrap_or(&[])
    }

    /// Stored values joined with `separator`, or `None` when there are none.
    pub fn joined(&self, category: &str, separator: &str) -> Option<String> {
        let values = self.values(category);
        if values.is_empty() {
            None
        } else {
            Some(values.join(separator))
        }
    }

    pub fn insert(&mut self, category: impl Into<String>, selection: Selection) {
        self.0.insert(category.into(), selection);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Return a new state with `value` toggled in `category`.
    ///
    /// `Multiple` adds the value when absent and removes it when present,
    /// keeping the order of the remaining values, so toggling a present
    /// value twice yields the same values with that one moved to the end.
    /// `Single` replaces the stored value outright. `self` is left untouched.
    pub fn toggled(&self, category: &str, value: &str, cardinality: Cardinality) -> SelectionState {
        let mut next = self.clone();
        let selection = match cardinality {
            Cardinality::Single => Selection::Single(value.to_string()),
            Cardinality::Multiple => {
                let mut values = self.values(category).to_vec();
                if let Some(pos) = values.iter().position(|v| v == value) {
                    values.remove(pos);
                } else {
                    values.push(value.to_string());
                }
                Selection::Multiple(values)
            }
        };
        next.0.insert(category.to_string(), selection);
        next
    }
}

impl FromIterator<(String, Selection)> for SelectionState {
    fn from_iter<I: IntoIterator<Item = (String, Selection)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Selections for every screen visited in this installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GlobalSelectionState(BTreeMap<ScreenId, SelectionState>);

impl GlobalSelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, screen: ScreenId) -> Option<&SelectionState> {
        self.0.get(&screen)
    }

    pub fn set(&mut self, screen: ScreenId, state: SelectionState) {
        self.0.insert(screen, state);
    }

    /// A copy of the whole state with `screen` replaced by `state`.
    pub fn with_screen(&self, screen: ScreenId, state: SelectionState) -> GlobalSelectionState {
        let mut snapshot = self.clone();
        snapshot.set(screen, state);
        snapshot
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn screens(&self) -> impl Iterator<Item = ScreenId> + '_ {
        self.0.keys().copied()
    }
}
