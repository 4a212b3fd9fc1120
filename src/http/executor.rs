//! Request executor
//!
//! Builds the full URL, attaches authentication and identification
//! headers, performs exactly one HTTP call, and maps the response status
//! to either a decoded body or a typed failure. Retries, caching, and
//! rate limiting are not this layer's concern.

use crate::config::FloatConfig;
use crate::error::{Error, Result};
use crate::types::{JsonValue, Method, StringMap};
use reqwest::header::HeaderMap;
use reqwest::Client;
use tracing::debug;

/// Normalized outcome of one successful round trip
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code returned by the server
    pub status: u16,
    /// Response headers (pagination metadata lives here)
    pub headers: HeaderMap,
    /// Decoded JSON body; `None` for DELETE (204 carries no body)
    pub body: Option<JsonValue>,
}

/// Performs single HTTP round trips against the Float API
pub struct RequestExecutor {
    client: Client,
    config: FloatConfig,
}

impl RequestExecutor {
    /// Create an executor from a client configuration
    pub fn new(config: FloatConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self { client, config })
    }

    /// The configuration this executor was built with
    pub fn config(&self) -> &FloatConfig {
        &self.config
    }

    /// Perform one HTTP round trip.
    ///
    /// `path` is appended to the configured base URL. The expected
    /// success status is a function of the verb (GET 200, POST 201,
    /// PATCH 200, DELETE 204); any other status is an error. A 422 on
    /// POST/PATCH means the server could not validate the submitted
    /// data and maps to `ValidationRejected` with the response body as
    /// details.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &StringMap,
        body: Option<&JsonValue>,
    ) -> Result<ApiResponse> {
        let url = self.build_url(path);

        let mut req = self
            .client
            .request(method.into(), &url)
            .bearer_auth(&self.config.access_token);

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let expected = method.expected_status();

        if status != expected {
            let details = response.text().await.unwrap_or_default();
            if status == 422 && method.has_body() {
                return Err(Error::validation_rejected(details));
            }
            return Err(Error::unexpected_status(expected, status, details));
        }

        debug!("{method} {url} -> {status}");

        let body = if method == Method::DELETE {
            None
        } else {
            Some(response.json().await?)
        };

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    /// Build full URL from a resource path
    fn build_url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("base_url", &self.config.base_url)
            .field("user_agent", &self.config.user_agent())
            .finish_non_exhaustive()
    }
}
