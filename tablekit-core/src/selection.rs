//! Selection state for grid rows.
//!
//! Selection uses stable row keys, never positional indices, so it survives
//! re-sorting, filtering and pagination of the underlying rows.

use std::collections::HashSet;

/// Selection mode for a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// No selection allowed
    #[default]
    None,
    /// At most one row selected
    Single,
    /// Any number of rows selected
    Multiple,
}

/// Key-based selection state.
///
/// Every mutation reports `(added, removed)` keys so the host sees each
/// deselect as its own event - in single-select mode, selecting a new row
/// first reports the removal of the previously selected one.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    mode: SelectionMode,
    selected: HashSet<String>,
}

impl Selection {
    /// Create an empty selection with the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    /// Get the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Change the selection mode.
    ///
    /// Any existing selection is cleared; the removed keys are returned.
    pub fn set_mode(&mut self, mode: SelectionMode) -> Vec<String> {
        self.mode = mode;
        self.clear()
    }

    /// Get all selected keys (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.selected.iter().cloned().collect();
        keys.sort();
        keys
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    /// Get the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Toggle selection of a key.
    ///
    /// Returns `(added, removed)` keys.
    ///
    /// - `Multiple`: plain membership toggle.
    /// - `Single`: toggling an unselected key clears every current member
    ///   first, then adds it; toggling the selected key empties the set.
    /// - `None`: no-op.
    pub fn toggle(&mut self, key: &str) -> (Vec<String>, Vec<String>) {
        match self.mode {
            SelectionMode::None => (vec![], vec![]),
            SelectionMode::Multiple => {
                if self.selected.remove(key) {
                    (vec![], vec![key.to_string()])
                } else {
                    self.selected.insert(key.to_string());
                    (vec![key.to_string()], vec![])
                }
            }
            SelectionMode::Single => {
                if self.selected.remove(key) {
                    (vec![], vec![key.to_string()])
                } else {
                    let removed: Vec<String> = self.selected.drain().collect();
                    self.selected.insert(key.to_string());
                    (vec![key.to_string()], removed)
                }
            }
        }
    }

    /// Select all keys from the provided list (multi-select only).
    ///
    /// Returns the keys that were newly selected.
    pub fn select_all(&mut self, all_keys: &[String]) -> Vec<String> {
        if self.mode != SelectionMode::Multiple {
            return vec![];
        }
        let mut added = Vec::new();
        for key in all_keys {
            if self.selected.insert(key.clone()) {
                added.push(key.clone());
            }
        }
        added
    }

    /// Clear all selection.
    ///
    /// Returns the keys that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        self.selected.drain().collect()
    }

    /// Drop selected keys that are no longer present in the row set.
    ///
    /// Returns the keys that were removed.
    pub fn retain_known(&mut self, known: &HashSet<String>) -> Vec<String> {
        let stale: Vec<String> = self
            .selected
            .iter()
            .filter(|k| !known.contains(*k))
            .cloned()
            .collect();
        for key in &stale {
            self.selected.remove(key);
        }
        stale
    }
}
