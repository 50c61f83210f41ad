//! Pagination envelope for list endpoints.

use serde::{Deserialize, Serialize};

/// One fetched page of a collection, as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub pages: u32,
    pub total: u64,
}

impl<T> Page<T> {
    /// Wrap an unpaginated full-collection response as a single page.
    ///
    /// Used for the `limit = -1` dropdown variant, which returns every
    /// record in one envelope without page metadata.
    #[must_use]
    pub fn unpaged(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self {
            items,
            page: 1,
            pages: 1,
            total,
        }
    }

    /// The pagination metadata without the items.
    #[must_use]
    pub const fn info(&self) -> PageInfo {
        PageInfo {
            page: self.page,
            pages: self.pages,
            total: self.total,
        }
    }
}

/// Snapshot of the most recent fetch's pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u32,
    pub pages: u32,
    pub total: u64,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page: 1,
            pages: 1,
            total: 0,
        }
    }
}

/// Page size requested from a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLimit {
    /// At most this many items per page.
    Of(u32),
    /// The whole collection in one response (`limit = -1` on the wire).
    All,
}

impl PageLimit {
    /// The value sent in the `limit` query parameter.
    #[must_use]
    pub fn query_value(self) -> i64 {
        match self {
            Self::Of(n) => i64::from(n),
            Self::All => -1,
        }
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::Of(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaged_synthesizes_single_page() {
        let page = Page::unpaged(vec!["a", "b", "c"]);
        assert_eq!(
            page.info(),
            PageInfo {
                page: 1,
                pages: 1,
                total: 3
            }
        );
    }

    #[test]
    fn test_limit_query_values() {
        assert_eq!(PageLimit::Of(10).query_value(), 10);
        assert_eq!(PageLimit::All.query_value(), -1);
        assert_eq!(PageLimit::default().query_value(), 10);
    }

    #[test]
    fn test_page_envelope_deserializes() {
        let page: Page<String> =
            serde_json::from_str(r#"{"items":["x"],"page":2,"pages":3,"total":25}"#)
                .expect("deserialize");
        assert_eq!(page.items, vec!["x".to_owned()]);
        assert_eq!(page.page, 2);
        assert_eq!(page.pages, 3);
        assert_eq!(page.total, 25);
    }
}
