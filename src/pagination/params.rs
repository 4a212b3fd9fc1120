//! Page parameter normalization
//!
//! Callers may spell the page-size parameter either `per_page` or
//! `per-page`; the wire format is `per-page`. Defaults are 200 records
//! per page starting at page 1.

use crate::types::StringMap;

/// Wire-level page size parameter name
pub const PER_PAGE_PARAM: &str = "per-page";

/// Wire-level page number parameter name
pub const PAGE_PARAM: &str = "page";

/// Default page size
pub const DEFAULT_PER_PAGE: u32 = 200;

/// Default starting page
pub const DEFAULT_START_PAGE: u64 = 1;

/// Normalized query parameters for a paginated crawl
#[derive(Debug, Clone)]
pub struct PageParams {
    query: StringMap,
    start_page: u64,
}

impl PageParams {
    /// Normalize caller-supplied parameters.
    ///
    /// Accepts both `per_page` and `per-page` spellings for the page
    /// size, applies defaults for page size and starting page, and
    /// passes every other parameter through untouched.
    pub fn new(params: StringMap) -> Self {
        let mut query = StringMap::new();
        let mut per_page = None;
        let mut start_page = DEFAULT_START_PAGE;

        for (key, value) in params {
            match key.as_str() {
                "per_page" | PER_PAGE_PARAM => per_page = Some(value),
                PAGE_PARAM => {
                    start_page = value.parse().unwrap_or(DEFAULT_START_PAGE);
                }
                _ => {
                    query.insert(key, value);
                }
            }
        }

        query.insert(
            PER_PAGE_PARAM.to_string(),
            per_page.unwrap_or_else(|| DEFAULT_PER_PAGE.to_string()),
        );

        Self { query, start_page }
    }

    /// The page number the crawl starts at
    pub fn start_page(&self) -> u64 {
        self.start_page
    }

    /// Full query map for a given page number
    pub fn query_for(&self, page: u64) -> StringMap {
        let mut query = self.query.clone();
        query.insert(PAGE_PARAM.to_string(), page.to_string());
        query
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(StringMap::new())
    }
}
