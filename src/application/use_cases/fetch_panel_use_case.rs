//! Fetch-transform-fallback cycle shared by every data-driven panel.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::errors::FetchError;
use crate::domain::ports::{HttpPort, PanelFeed};
use crate::domain::FetchOutcome;

/// Runs one fetch cycle for a panel feed.
pub struct FetchPanelUseCase<F> {
    http: Arc<dyn HttpPort>,
    feed: Arc<F>,
}

impl<F> Clone for FetchPanelUseCase<F> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            feed: Arc::clone(&self.feed),
        }
    }
}

impl<F: PanelFeed> FetchPanelUseCase<F> {
    /// Creates new fetch use case.
    #[must_use]
    pub const fn new(http: Arc<dyn HttpPort>, feed: Arc<F>) -> Self {
        Self { http, feed }
    }

    /// Executes one cycle.
    ///
    /// Never fails: every error is logged and replaced with the feed's
    /// fallback view model and warning.
    pub async fn execute(&self) -> FetchOutcome<F::ViewModel> {
        let name = self.feed.name();
        debug!(feed = name, "Fetching panel data");

        match self.fetch().await {
            Ok(data) => {
                info!(feed = name, "Panel data loaded");
                FetchOutcome::Live(data)
            }
            Err(e) => {
                if e.is_network_error() {
                    warn!(feed = name, error = %e, "Panel source unreachable, using fallback data");
                } else {
                    error!(feed = name, error = %e, "Panel source sent unusable data, using fallback data");
                }
                FetchOutcome::Fallback {
                    data: self.feed.fallback(),
                    reason: self.feed.fallback_warning(&e),
                }
            }
        }
    }

    async fn fetch(&self) -> Result<F::ViewModel, FetchError> {
        let request = self.feed.request();
        let body = self.http.get_body(&request).await?;
        let raw: F::Raw = serde_json::from_str(&body).map_err(|e| FetchError::shape(e.to_string()))?;
        self.feed.transform(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::HttpRequest;
    use crate::domain::ports::mocks::MockHttpPort;
    use crate::domain::Provenance;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Raw {
        value: Option<i32>,
    }

    struct DoubleFeed;

    impl PanelFeed for DoubleFeed {
        type Raw = Raw;
        type ViewModel = i32;

        fn name(&self) -> &'static str {
            "double"
        }

        fn request(&self) -> HttpRequest {
            HttpRequest::get("https://api.test/value").header("Accept", "application/json")
        }

        fn transform(&self, raw: Raw) -> Result<i32, FetchError> {
            raw.value
                .map(|v| v * 2)
                .ok_or_else(|| FetchError::shape("missing value"))
        }

        fn fallback(&self) -> i32 {
            -1
        }

        fn fallback_warning(&self, error: &FetchError) -> String {
            format!("demo: {error}")
        }
    }

    fn make_use_case(http: MockHttpPort) -> (FetchPanelUseCase<DoubleFeed>, Arc<MockHttpPort>) {
        let http = Arc::new(http);
        (
            FetchPanelUseCase::new(http.clone(), Arc::new(DoubleFeed)),
            http,
        )
    }

    #[tokio::test]
    async fn test_live_data_is_transformed() {
        let (use_case, http) =
            make_use_case(MockHttpPort::new().respond("https://api.test", Ok(r#"{"value": 21}"#.into())));

        let outcome = use_case.execute().await;

        assert_eq!(outcome, FetchOutcome::Live(42));
        let requests = http.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].headers, vec![("Accept", "application/json".to_string())]);
    }

    #[tokio::test]
    async fn test_network_error_yields_fallback() {
        let (use_case, _) = make_use_case(MockHttpPort::new());

        let outcome = use_case.execute().await;

        assert_eq!(outcome.provenance(), Provenance::Fallback);
        assert_eq!(*outcome.data(), -1);
        assert!(outcome.warning().unwrap().starts_with("demo: network error"));
    }

    #[tokio::test]
    async fn test_status_error_yields_fallback() {
        let (use_case, _) =
            make_use_case(MockHttpPort::new().respond("https://api.test", Err(FetchError::status(503))));

        let outcome = use_case.execute().await;

        assert_eq!(outcome.warning(), Some("demo: HTTP error! status: 503"));
    }

    #[tokio::test]
    async fn test_shape_errors_yield_fallback() {
        let (use_case, _) =
            make_use_case(MockHttpPort::new().respond("https://api.test", Ok("{}".into())));
        assert_eq!(*use_case.execute().await.data(), -1);

        let (use_case, _) =
            make_use_case(MockHttpPort::new().respond("https://api.test", Ok("not json".into())));
        assert_eq!(use_case.execute().await.provenance(), Provenance::Fallback);
    }
}
