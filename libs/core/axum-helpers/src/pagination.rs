//! Page/limit query handling and the `{data, meta}` response envelope.
//!
//! Every paginated listing in the API accepts `page` and `limit` query
//! parameters (both 1-based; values below 1 are clamped to 1 so the skip
//! offset can never go negative) and responds with the items plus metadata
//! about the full filtered set.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// Pagination query parameters.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema, IntoParams)]
pub struct Pagination {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: i64,
    /// Page size
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Page clamped to >= 1.
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    /// Limit clamped to >= 1.
    pub fn limit(&self) -> i64 {
        self.limit.max(1)
    }

    /// Documents to skip: `(page - 1) * limit`, after clamping.
    pub fn skip(&self) -> u64 {
        ((self.page() - 1) * self.limit()) as u64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

/// Metadata describing one page of a filtered result set.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Size of the full filtered set, not the slice
    pub total_items: u64,
    /// Number of items in this slice
    pub item_count: usize,
    /// Requested page size
    pub items_per_page: i64,
    /// Total number of pages
    pub total_pages: u64,
    /// Current 1-based page
    pub current_page: i64,
}

/// One page of results plus its metadata.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total_items: u64, pagination: Pagination) -> Self {
        let limit = pagination.limit();
        let meta = PageMeta {
            total_items,
            item_count: data.len(),
            items_per_page: limit,
            total_pages: total_items.div_ceil(limit as u64),
            current_page: pagination.page(),
        };
        Self { data, meta }
    }

    /// Map the items while keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_is_zero_for_first_page() {
        assert_eq!(Pagination::new(1, 10).skip(), 0);
    }

    #[test]
    fn skip_advances_by_limit() {
        assert_eq!(Pagination::new(3, 10).skip(), 20);
    }

    #[test]
    fn page_and_limit_below_one_are_clamped() {
        let pagination = Pagination::new(0, -5);
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.limit(), 1);
        assert_eq!(pagination.skip(), 0);
    }

    #[test]
    fn last_partial_page_of_25_items() {
        // 25 matches, page 3, limit 10: the slice holds items 21-25.
        let pagination = Pagination::new(3, 10);
        assert_eq!(pagination.skip(), 20);

        let slice: Vec<u32> = (21..=25).collect();
        let paginated = Paginated::new(slice, 25, pagination);
        assert_eq!(paginated.meta.total_items, 25);
        assert_eq!(paginated.meta.item_count, 5);
        assert_eq!(paginated.meta.total_pages, 3);
        assert_eq!(paginated.meta.current_page, 3);
    }

    #[test]
    fn total_pages_rounds_up() {
        let paginated = Paginated::new(vec![1, 2, 3], 7, Pagination::new(1, 3));
        assert_eq!(paginated.meta.total_pages, 3);
    }

    #[test]
    fn empty_set_has_zero_pages() {
        let paginated: Paginated<u32> = Paginated::new(Vec::new(), 0, Pagination::default());
        assert_eq!(paginated.meta.total_pages, 0);
        assert_eq!(paginated.meta.item_count, 0);
    }

    #[test]
    fn map_preserves_meta() {
        let paginated = Paginated::new(vec![1, 2], 2, Pagination::default()).map(|n| n.to_string());
        assert_eq!(paginated.data, vec!["1", "2"]);
        assert_eq!(paginated.meta.total_items, 2);
    }

    #[test]
    fn defaults_deserialize_from_empty_query() {
        let pagination: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 10);
    }
}
