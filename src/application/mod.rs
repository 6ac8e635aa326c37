//! Application layer with use cases and form services.

/// Stateful services driven by the UI.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{ConverterForm, NotificationManager};
pub use use_cases::{FetchPanelUseCase, LoadPosterUseCase};
