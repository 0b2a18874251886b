//! Consumer-owned selection state for a grid.
//!
//! The navigation controller never stores the selection itself; it asks the
//! owner to change it. This type is what that owner keeps between renders.

use crate::error::GridError;
use crate::result::GridResult;

/// Current selection over a grid of `item_count` items.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
    item_count: usize,
}

impl SelectionState {
    /// Create a selection for `item_count` items, starting on the first one.
    pub fn new(item_count: usize) -> Self {
        Self {
            selected_index: (item_count > 0).then_some(0),
            item_count,
        }
    }

    /// Get the currently selected index.
    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Select an index, rejecting anything outside the grid.
    pub fn select(&mut self, index: usize) -> GridResult<()> {
        if index >= self.item_count {
            return Err(GridError::IndexOutOfRange {
                index,
                len: self.item_count,
            });
        }
        self.selected_index = Some(index);
        Ok(())
    }

    /// Reset the selection when the number of items changes.
    ///
    /// Returns true if the selection was reset.
    pub fn sync_item_count(&mut self, item_count: usize) -> bool {
        if item_count == self.item_count {
            return false;
        }
        self.item_count = item_count;
        self.reset();
        true
    }

    /// Move back to the first item, or to no selection for an empty grid.
    pub fn reset(&mut self) {
        self.selected_index = (self.item_count > 0).then_some(0);
    }

    /// Check if an index is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    /// Check if anything is selected.
    pub fn has_selection(&self) -> bool {
        self.selected_index.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selects_first_item() {
        let selection = SelectionState::new(5);
        assert_eq!(selection.get(), Some(0));
        assert!(selection.is_selected(0));
    }

    #[test]
    fn test_new_empty_has_no_selection() {
        let selection = SelectionState::new(0);
        assert!(selection.get().is_none());
        assert!(!selection.has_selection());
    }

    #[test]
    fn test_select() {
        let mut selection = SelectionState::new(5);
        selection.select(4).unwrap();
        assert_eq!(selection.get(), Some(4));
        assert!(!selection.is_selected(0));
    }

    #[test]
    fn test_select_out_of_range() {
        let mut selection = SelectionState::new(5);
        selection.select(3).unwrap();

        let result = selection.select(5);
        assert!(matches!(
            result,
            Err(GridError::IndexOutOfRange { index: 5, len: 5 })
        ));
        // Previous selection is kept
        assert_eq!(selection.get(), Some(3));
    }

    #[test]
    fn test_sync_item_count_resets_on_change() {
        let mut selection = SelectionState::new(9);
        selection.select(7).unwrap();

        assert!(!selection.sync_item_count(9));
        assert_eq!(selection.get(), Some(7));

        assert!(selection.sync_item_count(12));
        assert_eq!(selection.get(), Some(0));
        assert_eq!(selection.item_count(), 12);

        assert!(selection.sync_item_count(0));
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_reset() {
        let mut selection = SelectionState::new(3);
        selection.select(2).unwrap();
        selection.reset();
        assert_eq!(selection.get(), Some(0));
    }
}
