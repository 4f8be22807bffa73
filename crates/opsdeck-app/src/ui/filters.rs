//! Filter drafts: uncontrolled-to-store filter inputs.
//!
//! Filter controls mirror keystrokes into a local draft; nothing reaches
//! the shared slice (or the network) until an explicit commit. One fetch
//! per submit, not per keystroke.

use std::collections::BTreeMap;

use crate::store::{Entity, Slice};

/// Local, uncommitted filter edits for one list view.
#[derive(Debug, Clone, Default)]
pub struct FilterDraft {
    pending: BTreeMap<String, String>,
}

impl FilterDraft {
    /// Start an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft from the slice's current filters, for editing.
    pub fn from_current<T: Entity>(slice: &Slice<T>) -> Self {
        Self {
            pending: slice.filters().clone(),
        }
    }

    /// Record a keystroke-level edit. Empty values clear the key, so a
    /// blanked-out input removes its predicate on commit.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.pending.remove(&key);
        } else {
            self.pending.insert(key, value);
        }
    }

    /// Current draft value for an input.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pending.get(key).map(String::as_str)
    }

    /// Drop all draft edits.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Commit the draft into the slice's shared filter state.
    ///
    /// The caller is responsible for issuing the refetch afterwards; this
    /// transition itself is synchronous and local.
    pub fn commit_to<T: Entity>(&self, slice: &mut Slice<T>) {
        slice.replace_filters(self.pending.clone());
    }
}
