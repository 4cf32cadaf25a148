//! Pagination contract shared by every list endpoint.

use serde::{Deserialize, Serialize};

/// One page of a filtered collection.
///
/// `total` counts every document matching the active filter, not just the
/// returned slice, and `total_pages` is always `ceil(total / page_size)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        Self {
            items,
            total,
            page,
            page_size,
            total_pages: total.div_ceil(page_size as u64),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(Page::<()>::new(vec![], 0, 1, 10).total_pages, 0);
        assert_eq!(Page::<()>::new(vec![], 1, 1, 10).total_pages, 1);
        assert_eq!(Page::<()>::new(vec![], 10, 1, 10).total_pages, 1);
        assert_eq!(Page::<()>::new(vec![], 11, 1, 10).total_pages, 2);
        assert_eq!(Page::<()>::new(vec![], 100, 3, 7).total_pages, 15);
    }
}
