//! HTTP request execution module
//!
//! Performs one normalized round trip against the Float API per call.
//!
//! # Behavior
//!
//! - **Authentication**: bearer token on every request
//! - **Identification**: User-Agent from the client configuration
//! - **Status mapping**: verb-dependent expected codes, 422 → `ValidationRejected`
//! - **Strict outcomes**: no retries, no silent empty-result fallback

mod executor;

pub use executor::{ApiResponse, RequestExecutor};
