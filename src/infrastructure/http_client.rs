//! reqwest-backed HTTP transport.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::domain::errors::FetchError;
use crate::domain::ports::{HttpPort, HttpRequest};

const USER_AGENT: &str = concat!("infodeck/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by every panel feed.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates new client.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    async fn send(&self, request: &HttpRequest) -> Result<Response, FetchError> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();

        if !status.is_success() {
            warn!(url = %request.url, %status, "Request returned non-success status");
            return Err(FetchError::status(status.as_u16()));
        }

        Ok(response)
    }
}

fn map_transport_error(e: reqwest::Error) -> FetchError {
    warn!(error = %e, "HTTP request failed");
    if e.is_timeout() {
        FetchError::network("request timed out")
    } else if e.is_connect() {
        FetchError::network("failed to connect")
    } else {
        FetchError::network(e.to_string())
    }
}

#[async_trait]
impl HttpPort for ReqwestHttpClient {
    async fn get_body(&self, request: &HttpRequest) -> Result<String, FetchError> {
        debug!(url = %request.url, "GET");

        let response = self.send(request).await?;
        response.text().await.map_err(map_transport_error)
    }

    async fn check(&self, url: &str) -> Result<(), FetchError> {
        debug!(%url, "Probing resource");

        let response = self.send(&HttpRequest::get(url)).await?;
        response.bytes().await.map_err(map_transport_error)?;
        Ok(())
    }
}
