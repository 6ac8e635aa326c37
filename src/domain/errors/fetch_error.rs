//! Panel fetch error types.

use thiserror::Error;

/// Errors raised at a panel's fetch boundary.
///
/// Every variant is recovered inside the panel that raised it by substituting
/// the panel's fallback view model.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("unexpected response shape: {reason}")]
    Shape { reason: String },

    #[error("API reported an error: {message}")]
    Api { message: String },
}

impl FetchError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates non-success status error.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Creates response shape error.
    #[must_use]
    pub fn shape(reason: impl Into<String>) -> Self {
        Self::Shape {
            reason: reason.into(),
        }
    }

    /// Creates API-reported error.
    #[must_use]
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Returns whether error is transport related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(FetchError::network("boom").is_network_error());
        assert!(FetchError::status(503).is_network_error());
        assert!(!FetchError::shape("missing rates").is_network_error());
        assert!(!FetchError::api("invalid-key").is_network_error());
    }

    #[test]
    fn test_status_message() {
        assert_eq!(
            FetchError::status(404).to_string(),
            "HTTP error! status: 404"
        );
    }
}
