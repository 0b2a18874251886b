//! Row-major grid arithmetic.
//!
//! A [`GridLayout`] arranges `item_count` items into `column_count` columns.
//! Item `i` sits at row `i / columns`, column `i % columns`. The last row may be
//! partially filled. Navigation wraps around the flat index space, so moving
//! down from the last row lands in the first row at `(i + columns) mod items`.

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::keys::NavKey;
use crate::result::GridResult;

/// Row and column of an item in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    item_count: usize,
    column_count: usize,
}

impl GridLayout {
    /// Create a layout, rejecting a zero column count.
    pub fn new(item_count: usize, column_count: usize) -> GridResult<Self> {
        if column_count == 0 {
            return Err(GridError::Configuration(
                "column count must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            item_count,
            column_count,
        })
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.item_count
    }

    pub fn row_count(&self) -> usize {
        self.item_count.div_ceil(self.column_count)
    }

    pub fn position(&self, index: usize) -> Option<GridPosition> {
        if !self.contains(index) {
            return None;
        }
        Some(GridPosition {
            row: index / self.column_count,
            column: index % self.column_count,
        })
    }

    pub fn index_at(&self, row: usize, column: usize) -> Option<usize> {
        if column >= self.column_count {
            return None;
        }
        let index = row.checked_mul(self.column_count)?.checked_add(column)?;
        self.contains(index).then_some(index)
    }

    /// Compute the index a key moves the selection to.
    ///
    /// Returns `None` for keys that do not move the selection and for empty grids.
    /// Subtraction is done by adding the complement modulo `item_count`, so
    /// intermediates never go negative even when `column_count > item_count`.
    pub fn next_index(&self, current: usize, key: NavKey) -> Option<usize> {
        let n = self.item_count;
        if n == 0 {
            return None;
        }
        let idx = current % n;
        let step = self.column_count % n;
        match key {
            NavKey::Up => Some((idx + (n - step)) % n),
            NavKey::Down => Some((idx + step) % n),
            NavKey::Right => Some((idx + 1) % n),
            NavKey::Left => Some((idx + (n - 1)) % n),
            NavKey::Cancel | NavKey::Activate => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(items: usize, columns: usize) -> GridLayout {
        GridLayout::new(items, columns).unwrap()
    }

    #[test]
    fn test_zero_columns_rejected() {
        let result = GridLayout::new(9, 0);
        assert!(matches!(result, Err(GridError::Configuration(_))));
    }

    #[test]
    fn test_row_count() {
        assert_eq!(layout(0, 3).row_count(), 0);
        assert_eq!(layout(9, 3).row_count(), 3);
        assert_eq!(layout(10, 3).row_count(), 4);
        assert_eq!(layout(2, 5).row_count(), 1);
    }

    #[test]
    fn test_position_and_index_at() {
        let grid = layout(8, 3);
        assert_eq!(grid.position(7), Some(GridPosition { row: 2, column: 1 }));
        assert_eq!(grid.position(8), None);
        assert_eq!(grid.index_at(2, 1), Some(7));
        // Row 2 only has two items
        assert_eq!(grid.index_at(2, 2), None);
        assert_eq!(grid.index_at(0, 3), None);
    }

    #[test]
    fn test_right_wraps_from_last_to_first() {
        for n in 1..12 {
            assert_eq!(layout(n, 3).next_index(n - 1, NavKey::Right), Some(0));
        }
    }

    #[test]
    fn test_left_wraps_from_first_to_last() {
        for n in 1..12 {
            assert_eq!(layout(n, 3).next_index(0, NavKey::Left), Some(n - 1));
        }
    }

    #[test]
    fn test_down_wraps_to_top() {
        assert_eq!(layout(9, 3).next_index(7, NavKey::Down), Some(1));
        assert_eq!(layout(9, 3).next_index(1, NavKey::Down), Some(4));
    }

    #[test]
    fn test_up_wraps_to_bottom() {
        assert_eq!(layout(9, 3).next_index(1, NavKey::Up), Some(7));
        assert_eq!(layout(9, 3).next_index(4, NavKey::Up), Some(1));
    }

    #[test]
    fn test_partial_last_row_wraps_through_flat_index() {
        // 3 columns, 8 items: moving down from index 6 goes to (6 + 3) mod 8 = 1
        assert_eq!(layout(8, 3).next_index(6, NavKey::Down), Some(1));
        // and up from 0 goes to (0 - 3 + 8) mod 8 = 5
        assert_eq!(layout(8, 3).next_index(0, NavKey::Up), Some(5));
    }

    #[test]
    fn test_columns_wider_than_items() {
        let grid = layout(2, 5);
        // (0 - 5) rem_euclid 2 = 1
        assert_eq!(grid.next_index(0, NavKey::Up), Some(1));
        assert_eq!(grid.next_index(0, NavKey::Down), Some(1));
        assert_eq!(grid.next_index(1, NavKey::Down), Some(0));
    }

    #[test]
    fn test_single_item_stays_put() {
        let grid = layout(1, 3);
        for key in [NavKey::Up, NavKey::Down, NavKey::Left, NavKey::Right] {
            assert_eq!(grid.next_index(0, key), Some(0));
        }
    }

    #[test]
    fn test_empty_grid_never_moves() {
        let grid = layout(0, 3);
        for key in [NavKey::Up, NavKey::Down, NavKey::Left, NavKey::Right] {
            assert_eq!(grid.next_index(0, key), None);
        }
    }

    #[test]
    fn test_non_moving_keys() {
        let grid = layout(9, 3);
        assert_eq!(grid.next_index(4, NavKey::Cancel), None);
        assert_eq!(grid.next_index(4, NavKey::Activate), None);
    }

    #[test]
    fn test_matches_euclidean_formula() {
        for n in 1..10i64 {
            for c in 1..12i64 {
                let grid = layout(n as usize, c as usize);
                for idx in 0..n {
                    let up = (idx - c).rem_euclid(n) as usize;
                    let down = (idx + c).rem_euclid(n) as usize;
                    assert_eq!(grid.next_index(idx as usize, NavKey::Up), Some(up));
                    assert_eq!(grid.next_index(idx as usize, NavKey::Down), Some(down));
                }
            }
        }
    }
}
