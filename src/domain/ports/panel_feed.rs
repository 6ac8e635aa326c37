//! Data feed port shared by every data-driven panel.

use serde::de::DeserializeOwned;

use crate::domain::errors::FetchError;
use crate::domain::ports::HttpRequest;

/// Describes how one panel fetches, validates and degrades its data.
///
/// Implementations are pure: the request is built from configuration, the raw
/// body is decoded into [`PanelFeed::Raw`] by the caller, and the fallback is a
/// fixed constant.
pub trait PanelFeed: Send + Sync {
    /// Decoded response body.
    type Raw: DeserializeOwned + Send;
    /// Display-ready model.
    type ViewModel: Send + 'static;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Builds the request for one fetch cycle.
    fn request(&self) -> HttpRequest;

    /// Validates the payload and derives the view model.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Shape`] or [`FetchError::Api`] when the payload
    /// decodes but does not carry what the panel needs.
    fn transform(&self, raw: Self::Raw) -> Result<Self::ViewModel, FetchError>;

    /// Returns the fixed demonstration view model.
    fn fallback(&self) -> Self::ViewModel;

    /// Returns the user-visible warning shown next to the fallback.
    fn fallback_warning(&self, error: &FetchError) -> String;
}
