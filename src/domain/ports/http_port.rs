//! HTTP transport port definition.

use async_trait::async_trait;

use crate::domain::errors::FetchError;

/// Outgoing GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL including the query string.
    pub url: String,
    /// Extra request headers.
    pub headers: Vec<(&'static str, String)>,
}

impl HttpRequest {
    /// Creates GET request without extra headers.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }
}

/// Port for plain HTTP GET operations.
#[async_trait]
pub trait HttpPort: Send + Sync {
    /// Performs the request and returns the response body.
    ///
    /// Non-success status codes are reported as [`FetchError::Status`].
    async fn get_body(&self, request: &HttpRequest) -> Result<String, FetchError>;

    /// Checks that a resource is reachable and returns a success status.
    async fn check(&self, url: &str) -> Result<(), FetchError>;
}
