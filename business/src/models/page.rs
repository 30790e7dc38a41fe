//! Pagination request/response shapes.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page sizes offered by the table footer.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// 1-based page coordinates sent as `pageIndex`/`pageSize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_index: NonZeroU32,
    pub page_size: NonZeroU32,
}

impl PageRequest {
    /// Returns `None` when either coordinate is zero.
    pub fn new(page_index: u32, page_size: u32) -> Option<Self> {
        Some(Self {
            page_index: NonZeroU32::new(page_index)?,
            page_size: NonZeroU32::new(page_size)?,
        })
    }

    pub fn first(page_size: NonZeroU32) -> Self {
        Self {
            page_index: NonZeroU32::MIN,
            page_size,
        }
    }

    pub fn index(self) -> u32 {
        self.page_index.get()
    }

    pub fn size(self) -> u32 {
        self.page_size.get()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(NonZeroU32::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroU32::MIN))
    }
}

/// One page of a filtered server-side result set.
///
/// `total` is the size of the whole filtered set, not of this page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
        }
    }

    /// Whether the page respects `records <= page_size` and `total >= records`.
    pub fn is_consistent(&self, page: PageRequest) -> bool {
        self.records.len() <= page.size() as usize && self.total >= self.records.len() as u64
    }

    /// Repairs a page that breaks its size invariants.
    ///
    /// Surplus records are dropped and `total` is raised to cover what remains.
    #[must_use]
    pub fn normalized(mut self, page: PageRequest) -> Self {
        let limit = page.size() as usize;
        if self.records.len() > limit {
            log::warn!(
                "Page {} carried {} records for a page size of {limit}; truncating",
                page.index(),
                self.records.len()
            );
            self.records.truncate(limit);
        }
        let shown = self.records.len() as u64;
        if self.total < shown {
            log::warn!("Reported total {} is below {shown} shown records", self.total);
            self.total = shown;
        }
        self
    }

    /// Number of pages needed to show `total` records.
    pub fn page_count(&self, page: PageRequest) -> u64 {
        self.total.div_ceil(u64::from(page.size())).max(1)
    }
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(index: u32, size: u32) -> PageRequest {
        PageRequest::new(index, size).unwrap()
    }

    #[test]
    fn zero_coordinates_are_refused() {
        assert!(PageRequest::new(0, 20).is_none());
        assert!(PageRequest::new(1, 0).is_none());
        assert_eq!(PageRequest::default(), page(1, 20));
    }

    #[test]
    fn page_request_serializes_camel_case() {
        let value = serde_json::to_value(page(3, 50)).unwrap();
        assert_eq!(value, serde_json::json!({ "pageIndex": 3, "pageSize": 50 }));
    }

    #[test]
    fn normalized_pages_hold_the_size_invariants() {
        for size in [1_u32, 2, 5, 20] {
            for count in 0..30_u32 {
                for total in [0_u64, 3, 100] {
                    let result = PageResult {
                        records: (0..count).collect::<Vec<_>>(),
                        total,
                    }
                    .normalized(page(1, size));

                    assert!(result.records.len() <= size as usize);
                    assert!(result.total >= result.records.len() as u64);
                    assert!(result.is_consistent(page(1, size)));
                }
            }
        }
    }

    #[test]
    fn page_count_rounds_up() {
        let result = PageResult::<u8> {
            records: Vec::new(),
            total: 41,
        };
        assert_eq!(result.page_count(page(1, 20)), 3);
        assert_eq!(PageResult::<u8>::empty().page_count(page(1, 20)), 1);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let result: PageResult<u8> = serde_json::from_str("{}").unwrap();
        assert_eq!(result, PageResult::empty());
    }
}
