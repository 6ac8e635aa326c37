//! Poster reachability check.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::HttpPort;

/// Checks whether a film poster can be loaded.
#[derive(Clone)]
pub struct LoadPosterUseCase {
    http: Arc<dyn HttpPort>,
}

impl LoadPosterUseCase {
    /// Creates new poster loader.
    #[must_use]
    pub const fn new(http: Arc<dyn HttpPort>) -> Self {
        Self { http }
    }

    /// Returns `true` when the poster URL answers with a success status.
    pub async fn execute(&self, url: &str) -> bool {
        match self.http.check(url).await {
            Ok(()) => true,
            Err(e) => {
                debug!(%url, error = %e, "Poster failed to load, using placeholder");
                false
            }
        }
    }
}
