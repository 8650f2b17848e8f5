//! HTTP client abstraction for testability

use std::time::Duration;

use crate::error::{Error, Result};

/// Default request timeout for version sources.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for HTTP client operations.
///
/// Allows mock clients to stand in for the network in tests.
pub trait HttpClient {
    /// Performs an HTTP GET request and returns the response body.
    ///
    /// Non-success statuses are errors.
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP client backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a client with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a client whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("asdf-go-install/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http {
                url: String::new(),
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let http_error = |message: String| Error::Http {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| http_error(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(http_error(format!("HTTP {}", response.status())));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| http_error(format!("Failed to read response: {e}")))
    }
}
