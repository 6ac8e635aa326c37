//! Domain entity definitions.

mod currency;
mod film;
mod weather;

pub use currency::{
    ConversionRequest, ConversionResult, CurrencyCode, CurrencyInfo, ExchangeRateTable,
    POPULAR_CURRENCIES, RateRow,
};
pub use film::{
    Film, FilmCard, NamedItem, POSTER_PLACEHOLDER_URL, Poster, PosterSource, PosterStatus, Rating,
};
pub use weather::{
    CurrentWeather, DailyForecast, TemperatureBand, WeatherCondition, WeatherSnapshot,
    describe_weather_code, hpa_to_mmhg, wind_direction_label,
};
