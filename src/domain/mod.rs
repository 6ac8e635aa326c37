//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Transient notifications.
pub mod notification;
/// Panel fetch state machine.
pub mod panel_state;
/// Port definitions.
pub mod ports;
/// Numeric rounding helpers.
pub mod rounding;
/// Navigation routes.
pub mod route;
/// Serde utilities.
pub mod serde_utils;

pub use errors::{AmountError, FetchError};
pub use notification::{Notification, NotificationLevel};
pub use panel_state::{FetchOutcome, PanelState, PanelView, Provenance};
pub use ports::{HttpPort, HttpRequest, PanelFeed};
pub use route::Route;
