//! Pagination module
//!
//! Walks server-driven paginated list responses into one aggregated,
//! order-preserving result.
//!
//! # Overview
//!
//! The Float API paginates list endpoints with the `per-page` and `page`
//! request parameters and reports crawl progress in the
//! `X-Pagination-Current-Page`, `X-Pagination-Page-Count` and
//! `X-Pagination-Total-Count` response headers. `fetch_all` requests
//! pages strictly in sequence until the server reports the current page
//! has reached the page count, then checks the aggregate length against
//! the server's total count.

mod params;
mod walker;

pub use params::{PageParams, DEFAULT_PER_PAGE, DEFAULT_START_PAGE, PAGE_PARAM, PER_PAGE_PARAM};
pub use walker::{fetch_all, CURRENT_PAGE_HEADER, PAGE_COUNT_HEADER, TOTAL_COUNT_HEADER};
