//! Sequential page walker
//!
//! Fetches a complete list for a resource path across server-driven
//! pages. The page number for each request is a function of the previous
//! response's headers, so the crawl is strictly sequential.

use super::params::PageParams;
use crate::error::{Error, Result};
use crate::http::RequestExecutor;
use crate::types::{JsonValue, Method, Record, StringMap};
use reqwest::header::HeaderMap;
use tracing::debug;

/// Header reporting the page the server just served
pub const CURRENT_PAGE_HEADER: &str = "X-Pagination-Current-Page";

/// Header reporting how many pages the full list spans
pub const PAGE_COUNT_HEADER: &str = "X-Pagination-Page-Count";

/// Header reporting how many records the full list holds
pub const TOTAL_COUNT_HEADER: &str = "X-Pagination-Total-Count";

/// Fetch every page of a list endpoint into one aggregate.
///
/// Records are appended in server order, page by page, with no
/// deduplication or re-sorting. The crawl stops when the server reports
/// the current page has reached the page count; the aggregate length is
/// then checked against the total-count header of the last response. A
/// disagreement means the server changed state mid-crawl (or a protocol
/// misunderstanding) and fails with `PaginationCountMismatch`.
///
/// Failures from the executor propagate immediately; the partial
/// aggregate is discarded.
pub async fn fetch_all(
    executor: &RequestExecutor,
    path: &str,
    params: StringMap,
) -> Result<Vec<Record>> {
    let page_params = PageParams::new(params);
    let mut records: Vec<Record> = Vec::new();
    let mut page = page_params.start_page();

    loop {
        let query = page_params.query_for(page);
        let response = executor.execute(Method::GET, path, &query, None).await?;

        let body = response
            .body
            .ok_or_else(|| Error::decode(format!("list response from {path} has no body")))?;
        let page_len = match body {
            JsonValue::Array(items) => {
                let len = items.len();
                records.extend(items);
                len
            }
            _ => {
                return Err(Error::decode(format!(
                    "expected a JSON array from {path}"
                )))
            }
        };

        let current = header_number(&response.headers, CURRENT_PAGE_HEADER)?;
        let page_count = header_number(&response.headers, PAGE_COUNT_HEADER)?;
        debug!("{path} page {current}/{page_count}: {page_len} records");

        if current >= page_count {
            let total = header_number(&response.headers, TOTAL_COUNT_HEADER)?;
            let aggregated = records.len() as u64;
            if total != aggregated {
                return Err(Error::PaginationCountMismatch {
                    expected: total,
                    actual: aggregated,
                });
            }
            return Ok(records);
        }

        page = current + 1;
    }
}

/// Read a numeric pagination header, failing if absent or unparsable
fn header_number(headers: &HeaderMap, name: &str) -> Result<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| Error::missing_header(name))
}
