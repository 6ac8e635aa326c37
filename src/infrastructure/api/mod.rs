//! Panel feeds for the upstream HTTP APIs.

mod currency;
pub mod dto;
mod films;
pub mod weather;

pub use currency::CurrencyFeed;
pub use films::FilmsFeed;
pub use weather::WeatherFeed;
