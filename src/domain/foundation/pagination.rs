//! Page requests and the storage-paginated result shape.
//!
//! A `PageRequest` is always valid once constructed: `page >= 1` and
//! `page_size >= 1`. Out-of-range input is rejected, never clamped.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Creates a page request, rejecting zero page numbers or sizes.
    pub fn new(page: u32, page_size: u32) -> Result<Self, ValidationError> {
        if page == 0 {
            return Err(ValidationError::out_of_range(
                "page",
                1.0,
                f64::from(u32::MAX),
                f64::from(page),
            ));
        }
        if page_size == 0 {
            return Err(ValidationError::out_of_range(
                "page_size",
                1.0,
                f64::from(u32::MAX),
                f64::from(page_size),
            ));
        }
        Ok(Self { page, page_size })
    }

    /// Creates a page request that additionally enforces an upper bound on size.
    pub fn bounded(page: u32, page_size: u32, max_page_size: u32) -> Result<Self, ValidationError> {
        let request = Self::new(page, page_size)?;
        if page_size > max_page_size {
            return Err(ValidationError::out_of_range(
                "page_size",
                1.0,
                f64::from(max_page_size),
                f64::from(page_size),
            ));
        }
        Ok(request)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of rows preceding this page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Number of rows in a full page.
    pub fn take(&self) -> u64 {
        u64::from(self.page_size)
    }

    /// Storage-level offset/limit for this page.
    pub fn to_list_options(&self) -> ListOptions {
        ListOptions {
            limit: Some(self.take()),
            offset: Some(self.skip()),
        }
    }

    /// Slices `[skip, skip + take)` out of an already materialized list.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let skip = usize::try_from(self.skip()).unwrap_or(usize::MAX);
        let take = usize::try_from(self.take()).unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(take).collect()
    }
}

/// Offset/limit handed to storage ports. `None` limit means "everything".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Maximum number of results to return.
    pub limit: Option<u64>,

    /// Number of results to skip.
    pub offset: Option<u64>,
}

impl ListOptions {
    /// Options that fetch the whole eligible set.
    pub fn unpaginated() -> Self {
        Self::default()
    }

    pub fn is_paginated(&self) -> bool {
        self.limit.is_some()
    }
}

/// Rows fetched from storage together with the storage-side match count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// A page whose offset/limit was applied by storage.
///
/// `storage_total` is the count of rows matching the storage filter, before
/// any post-fetch filtering was applied to this page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoragePage<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub storage_total: u64,
    pub has_more: bool,
}

impl<T> StoragePage<T> {
    pub fn new(items: Vec<T>, request: PageRequest, storage_total: u64) -> Self {
        let has_more = request.skip() + request.take() < storage_total;
        Self {
            items,
            page: request.page(),
            page_size: request.page_size(),
            storage_total,
            has_more,
        }
    }

    /// Transforms items while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> StoragePage<U> {
        StoragePage {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            storage_total: self.storage_total,
            has_more: self.has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_page_zero() {
        let err = PageRequest::new(0, 10).unwrap_err();
        assert_eq!(err.field(), "page");
    }

    #[test]
    fn rejects_page_size_zero() {
        let err = PageRequest::new(1, 0).unwrap_err();
        assert_eq!(err.field(), "page_size");
    }

    #[test]
    fn bounded_rejects_oversized_page_instead_of_clamping() {
        let err = PageRequest::bounded(1, 500, 100).unwrap_err();
        assert_eq!(err.field(), "page_size");
        assert!(PageRequest::bounded(1, 100, 100).is_ok());
    }

    #[test]
    fn first_page_skips_nothing() {
        let request = PageRequest::new(1, 20).unwrap();
        assert_eq!(request.skip(), 0);
        assert_eq!(request.take(), 20);
    }

    #[test]
    fn third_page_skips_two_pages() {
        let request = PageRequest::new(3, 20).unwrap();
        assert_eq!(request.skip(), 40);
    }

    #[test]
    fn list_options_mirror_skip_and_take() {
        let options = PageRequest::new(2, 5).unwrap().to_list_options();
        assert_eq!(options.offset, Some(5));
        assert_eq!(options.limit, Some(5));
        assert!(options.is_paginated());
        assert!(!ListOptions::unpaginated().is_paginated());
    }

    #[test]
    fn slice_takes_requested_window() {
        let request = PageRequest::new(2, 3).unwrap();
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(request.slice(items), vec![4, 5, 6]);
    }

    #[test]
    fn slice_past_the_end_is_empty() {
        let request = PageRequest::new(5, 3).unwrap();
        let items: Vec<u32> = (1..=10).collect();
        assert!(request.slice(items).is_empty());
    }

    #[test]
    fn storage_page_reports_has_more() {
        let request = PageRequest::new(1, 2).unwrap();
        let page = StoragePage::new(vec![1, 2], request, 5);
        assert!(page.has_more);

        let last = StoragePage::new(vec![5], PageRequest::new(3, 2).unwrap(), 5);
        assert!(!last.has_more);
    }

    #[test]
    fn storage_page_map_keeps_metadata() {
        let page = StoragePage::new(vec![1, 2], PageRequest::new(1, 2).unwrap(), 7);
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.storage_total, 7);
    }
}
