//! Infodeck - a terminal dashboard with films, currency and weather panels.
//!
//! This crate provides a terminal dashboard with clean architecture: each panel
//! fetches a public HTTP API, transforms the response into a view model and
//! falls back to fixed demonstration data when the network call fails.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "infodeck";
