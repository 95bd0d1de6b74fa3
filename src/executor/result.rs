//! Result types for query execution

use serde::{Deserialize, Serialize};

/// One page of an ordered result set.
///
/// `total_records` counts every match, not just this page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_records: usize,
    pub total_pages: usize,
}

impl<T> PagedResult<T> {
    /// Builds a page; `total_pages` is derived as ceil(total / page_size)
    pub fn new(items: Vec<T>, page_number: u32, page_size: u32, total_records: usize) -> Self {
        let total_pages = Self::pages_for(total_records, page_size);
        Self {
            items,
            page_number,
            page_size,
            total_records,
            total_pages,
        }
    }

    fn pages_for(total_records: usize, page_size: u32) -> usize {
        if page_size == 0 {
            return 0;
        }
        total_records.div_ceil(page_size as usize)
    }

    /// Returns true if this page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next_page(&self) -> bool {
        (self.page_number as usize) < self.total_pages
    }

    /// Returns an iterator over the items
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Maps items, keeping paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_records: self.total_records,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(PagedResult::<u8>::new(vec![], 1, 10, 0).total_pages, 0);
        assert_eq!(PagedResult::<u8>::new(vec![], 1, 10, 1).total_pages, 1);
        assert_eq!(PagedResult::<u8>::new(vec![], 1, 10, 10).total_pages, 1);
        assert_eq!(PagedResult::<u8>::new(vec![], 1, 10, 11).total_pages, 2);
        assert_eq!(PagedResult::<u8>::new(vec![], 1, 3, 7).total_pages, 3);
    }

    #[test]
    fn test_navigation() {
        let page = PagedResult::new(vec![1, 2], 1, 2, 5);
        assert!(!page.has_previous_page());
        assert!(page.has_next_page());

        let page = PagedResult::new(vec![5], 3, 2, 5);
        assert!(page.has_previous_page());
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = PagedResult::new(vec![1, 2], 2, 2, 4).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.total_records, 4);
        assert_eq!(page.total_pages, 2);
    }
}
