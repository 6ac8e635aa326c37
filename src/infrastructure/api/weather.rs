//! Nizhny Novgorod weather feed.

use chrono::Local;

use crate::domain::entities::{CurrentWeather, DailyForecast, WeatherSnapshot, hpa_to_mmhg};
use crate::domain::errors::FetchError;
use crate::domain::ports::{HttpRequest, PanelFeed};
use crate::domain::rounding::round_to_int;

use super::dto::{CurrentDto, DailyDto, ForecastResponse};

/// Latitude of Nizhny Novgorod.
pub const LATITUDE: f64 = 56.3269;
/// Longitude of Nizhny Novgorod.
pub const LONGITUDE: f64 = 44.0065;
/// Timezone the forecast is requested in.
pub const TIMEZONE: &str = "Europe/Moscow";

const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,pressure_msl,wind_speed_10m,wind_direction_10m,weather_code";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";
const FORECAST_DAYS: u8 = 7;

const WARNING: &str =
    "Не удалось загрузить актуальные данные о погоде. Проверьте подключение к интернету.";

/// Feed for the weather panel.
#[derive(Debug, Clone)]
pub struct WeatherFeed {
    url: String,
}

impl WeatherFeed {
    /// Creates feed for the given forecast endpoint.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl PanelFeed for WeatherFeed {
    type Raw = ForecastResponse;
    type ViewModel = WeatherSnapshot;

    fn name(&self) -> &'static str {
        "weather"
    }

    fn request(&self) -> HttpRequest {
        HttpRequest::get(format!(
            "{}?latitude={LATITUDE}&longitude={LONGITUDE}&current={CURRENT_FIELDS}&daily={DAILY_FIELDS}&timezone={TIMEZONE}&forecast_days={FORECAST_DAYS}",
            self.url
        ))
    }

    fn transform(&self, raw: ForecastResponse) -> Result<WeatherSnapshot, FetchError> {
        let current = raw
            .current
            .ok_or_else(|| FetchError::shape("current block is missing"))?;
        let daily = raw
            .daily
            .ok_or_else(|| FetchError::shape("daily block is missing"))?;

        Ok(WeatherSnapshot {
            current: current_weather(current),
            daily: daily_forecast(daily)?,
        })
    }

    fn fallback(&self) -> WeatherSnapshot {
        WeatherSnapshot::demo(Local::now().format("%Y-%m-%dT%H:%M").to_string())
    }

    fn fallback_warning(&self, _error: &FetchError) -> String {
        WARNING.to_string()
    }
}

fn current_weather(dto: CurrentDto) -> CurrentWeather {
    CurrentWeather {
        time: dto.time,
        temperature: round_to_int(dto.temperature_2m),
        apparent_temperature: round_to_int(dto.apparent_temperature),
        humidity: round_to_int(dto.relative_humidity_2m),
        pressure: hpa_to_mmhg(dto.pressure_msl),
        wind_speed: round_to_int(dto.wind_speed_10m),
        wind_direction: dto.wind_direction_10m,
        weather_code: dto.weather_code,
    }
}

fn daily_forecast(dto: DailyDto) -> Result<Vec<DailyForecast>, FetchError> {
    let len = dto.time.len();
    if dto.weather_code.len() != len
        || dto.temperature_2m_max.len() != len
        || dto.temperature_2m_min.len() != len
    {
        return Err(FetchError::shape("daily arrays differ in length"));
    }

    Ok(dto
        .time
        .into_iter()
        .zip(dto.weather_code)
        .zip(dto.temperature_2m_max.into_iter().zip(dto.temperature_2m_min))
        .map(|((time, weather_code), (max, min))| DailyForecast {
            time,
            weather_code,
            temperature_max: round_to_int(max),
            temperature_min: round_to_int(min),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "current": {
            "time": "2025-01-10T14:15",
            "temperature_2m": -7.5,
            "apparent_temperature": -12.4,
            "relative_humidity_2m": 81,
            "pressure_msl": 1013.25,
            "wind_speed_10m": 3.5,
            "wind_direction_10m": 200,
            "weather_code": 71
        },
        "daily": {
            "time": ["2025-01-10", "2025-01-11"],
            "weather_code": [71, 3],
            "temperature_2m_max": [-5.5, -2.4],
            "temperature_2m_min": [-10.6, -8.0]
        }
    }"#;

    fn feed() -> WeatherFeed {
        WeatherFeed::new("https://weather.test/v1/forecast")
    }

    #[test]
    fn test_request_targets_nizhny_novgorod() {
        let url = feed().request().url;

        assert!(url.starts_with("https://weather.test/v1/forecast?latitude=56.3269&longitude=44.0065"));
        assert!(url.contains("&timezone=Europe/Moscow&forecast_days=7"));
        assert!(url.contains("daily=weather_code,temperature_2m_max,temperature_2m_min"));
    }

    #[test]
    fn test_transform_rounds_and_converts() {
        let raw: ForecastResponse = serde_json::from_str(SAMPLE).unwrap();
        let snapshot = feed().transform(raw).unwrap();

        assert_eq!(snapshot.current.temperature, -7);
        assert_eq!(snapshot.current.apparent_temperature, -12);
        assert_eq!(snapshot.current.pressure, 760);
        assert_eq!(snapshot.current.wind_speed, 4);
        assert_eq!(snapshot.daily.len(), 2);
        assert_eq!(snapshot.daily[0].temperature_max, -5);
        assert_eq!(snapshot.daily[0].temperature_min, -11);
    }

    #[test]
    fn test_mismatched_daily_arrays_are_rejected() {
        let json = SAMPLE.replace(r#""weather_code": [71, 3]"#, r#""weather_code": [71]"#);
        let raw: ForecastResponse = serde_json::from_str(&json).unwrap();

        assert!(matches!(
            feed().transform(raw),
            Err(FetchError::Shape { .. })
        ));
    }

    #[test]
    fn test_missing_current_block_is_rejected() {
        let raw: ForecastResponse = serde_json::from_str(r#"{"daily": null}"#).unwrap();
        assert!(feed().transform(raw).is_err());
    }

    #[test]
    fn test_fallback_snapshot() {
        let fallback = feed().fallback();
        assert_eq!(fallback.current.temperature, -5);
        assert_eq!(fallback.current.humidity, 85);
        assert_eq!(fallback.daily.len(), 7);
        assert!(feed().fallback_warning(&FetchError::status(500)).starts_with("Не удалось"));
    }
}
