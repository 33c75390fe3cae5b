//! Autocomplete suggestion state
//!
//! Derived, ephemeral state for the suggestion dropdown: the current list
//! of matching command names for the live input prefix, and a selected
//! index into that list. Recomputed on every input change, never persisted.

use crate::commands::CommandRegistry;

/// The live suggestion list and selection.
///
/// `selected` is `None` when the list is empty; a non-empty list always
/// auto-selects its first entry.
#[derive(Debug, Default)]
pub struct SuggestionState {
    items: Vec<String>,
    selected: Option<usize>,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the list for the current input. An empty input closes the
    /// dropdown outright.
    pub fn update(&mut self, registry: &CommandRegistry, input: &str) {
        if input.is_empty() {
            self.close();
            return;
        }
        self.items = registry.suggestions(input);
        self.selected = if self.items.is_empty() { None } else { Some(0) };
    }

    /// Close the dropdown and forget the selection.
    pub fn close(&mut self) {
        self.items.clear();
        self.selected = None;
    }

    /// The dropdown is open whenever there is at least one suggestion.
    pub fn is_open(&self) -> bool {
        !self.items.is_empty()
    }

    /// Move the selection down, wrapping at the end.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        });
    }

    /// Move the selection up, wrapping at the start.
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i > 0 => i - 1,
            _ => self.items.len() - 1,
        });
    }

    /// Select a specific entry (mouse hover/click).
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = Some(index);
        }
    }

    /// The currently selected suggestion, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.and_then(|i| self.items.get(i)).map(String::as_str)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}
