//! Pagination State
//!
//! Page index / page size bookkeeping for the pagination row model.

use std::ops::Range;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A pagination mutation dispatched by the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    First,
    Previous,
    Next,
    Last,
    GoTo(usize),
    SetPageSize(usize),
}

/// Pagination state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_index: usize,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `row_count` rows (at least 1)
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size).max(1)
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, row_count: usize) -> bool {
        self.page_index + 1 < self.page_count(row_count)
    }

    /// Row index range of the current page
    pub fn page_range(&self, row_count: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(row_count);
        let end = (start + self.page_size).min(row_count);
        start..end
    }

    /// Apply a page action against `row_count` rows
    pub fn apply(&mut self, action: PageAction, row_count: usize) {
        let last = self.page_count(row_count) - 1;
        match action {
            PageAction::First => self.page_index = 0,
            PageAction::Previous => self.page_index = self.page_index.saturating_sub(1),
            PageAction::Next => self.page_index = (self.page_index + 1).min(last),
            PageAction::Last => self.page_index = last,
            PageAction::GoTo(index) => self.page_index = index.min(last),
            PageAction::SetPageSize(size) => {
                let size = size.max(1);
                let top_row = self.page_index * self.page_size;
                self.page_size = size;
                self.page_index = (top_row / size).min(self.page_count(row_count) - 1);
            }
        }
    }

    /// Back to the first page
    pub fn reset_page_index(&mut self) {
        self.page_index = 0;
    }

    /// Snapshot for display
    pub fn info(&self, row_count: usize) -> PageInfo {
        PageInfo {
            page_index: self.page_index,
            page_size: self.page_size,
            page_count: self.page_count(row_count),
            row_count,
            can_previous: self.can_previous(),
            can_next: self.can_next(row_count),
        }
    }
}

/// Read-only pagination snapshot consumed by the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub row_count: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        let state = PaginationState::new(10);
        assert_eq!(state.page_count(0), 1);
        assert_eq!(state.page_count(10), 1);
        assert_eq!(state.page_count(11), 2);
        assert_eq!(state.page_count(95), 10);
    }

    #[test]
    fn test_page_range_last_page_is_short() {
        let mut state = PaginationState::new(10);
        state.apply(PageAction::Last, 25);
        assert_eq!(state.page_index(), 2);
        assert_eq!(state.page_range(25), 20..25);
        assert!(!state.can_next(25));
        assert!(state.can_previous());
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = PaginationState::new(10);
        state.apply(PageAction::Previous, 25);
        assert_eq!(state.page_index(), 0);

        state.apply(PageAction::Next, 25);
        state.apply(PageAction::Next, 25);
        state.apply(PageAction::Next, 25);
        assert_eq!(state.page_index(), 2);

        state.apply(PageAction::GoTo(99), 25);
        assert_eq!(state.page_index(), 2);

        state.apply(PageAction::First, 25);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_set_page_size_keeps_top_row() {
        let mut state = PaginationState::new(10);
        state.apply(PageAction::GoTo(3), 100);
        state.apply(PageAction::SetPageSize(20), 100);
        assert_eq!(state.page_size(), 20);
        // Row 30 was on top; it lives on page 1 with 20 rows per page.
        assert_eq!(state.page_index(), 1);
    }

    #[test]
    fn test_zero_page_size_becomes_one() {
        let mut state = PaginationState::new(0);
        assert_eq!(state.page_size(), 1);
        state.apply(PageAction::SetPageSize(0), 5);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn test_empty_range() {
        let state = PaginationState::default();
        assert_eq!(state.page_range(0), 0..0);
        let info = state.info(0);
        assert_eq!(info.page_count, 1);
        assert!(!info.can_next);
        assert!(!info.can_previous);
    }
}
