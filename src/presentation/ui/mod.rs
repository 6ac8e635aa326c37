//! UI screens.

mod app;
mod converter_screen;
mod films_screen;
mod home_screen;
mod notification_popup;
mod panel;
mod weather_screen;

/// Formatting and layout helpers.
pub mod utils;

pub use app::App;
pub use converter_screen::ConverterScreen;
pub use films_screen::{FilmsScreen, FilmsScreenState};
pub use home_screen::HomeScreen;
pub use notification_popup::NotificationPopup;
pub use weather_screen::WeatherScreen;
