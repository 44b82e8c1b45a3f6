//! List selection state
//!
//! Backs the checkbox column of list screens (bookings, notes, to-dos) and
//! the batch delete that follows.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Payload for the backend's batch delete endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchDeleteRequest<T> {
    pub ids: Vec<T>,
}

/// Set of selected item ids owned by one list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet<T: Ord> {
    selected: BTreeSet<T>,
}

impl<T: Ord> Default for SelectionSet<T> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<T: Ord + Clone> SelectionSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`; returns whether it is now selected
    pub fn toggle(&mut self, id: T) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Replace the selection with every id in `all_ids`
    pub fn select_all<'a, I>(&mut self, all_ids: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.selected = all_ids.into_iter().cloned().collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &T) -> bool {
        self.selected.contains(id)
    }

    /// True when every id in `all_ids` is selected (vacuously true if empty)
    pub fn is_all_selected<'a, I>(&self, all_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        all_ids.into_iter().all(|id| self.selected.contains(id))
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in order
    pub fn to_vec(&self) -> Vec<T> {
        self.selected.iter().cloned().collect()
    }

    /// Ids to send on batch delete confirmation
    pub fn batch_delete_request(&self) -> BatchDeleteRequest<T> {
        BatchDeleteRequest { ids: self.to_vec() }
    }
}
