//! Response payloads of the three upstream APIs.
//!
//! Every field the panels depend on is optional here so that a missing field
//! surfaces as a shape error from the feed rather than a decode failure with
//! an opaque message.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::entities::Film;

/// Exchange rate API response.
#[derive(Debug, Deserialize)]
pub struct RatesResponse {
    /// `"success"` or `"error"`.
    #[serde(default)]
    pub result: Option<String>,
    /// Error code when `result` is `"error"`.
    #[serde(default, rename = "error-type")]
    pub error_type: Option<String>,
    /// Rates relative to the base currency.
    #[serde(default)]
    pub rates: Option<BTreeMap<String, f64>>,
}

/// Movie search API response.
#[derive(Debug, Deserialize)]
pub struct FilmsResponse {
    /// Films on the requested page.
    #[serde(default)]
    pub docs: Option<Vec<Film>>,
}

/// Forecast API response.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    /// Current conditions block.
    #[serde(default)]
    pub current: Option<CurrentDto>,
    /// Daily forecast columns.
    #[serde(default)]
    pub daily: Option<DailyDto>,
}

/// Current conditions in API units.
#[derive(Debug, Deserialize)]
#[allow(missing_docs)]
pub struct CurrentDto {
    pub time: String,
    pub temperature_2m: f64,
    pub apparent_temperature: f64,
    pub relative_humidity_2m: f64,
    /// Sea-level pressure, hPa.
    pub pressure_msl: f64,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: f64,
    pub weather_code: i32,
}

/// Daily forecast as parallel arrays.
#[derive(Debug, Deserialize)]
#[allow(missing_docs)]
pub struct DailyDto {
    pub time: Vec<String>,
    pub weather_code: Vec<i32>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_error_payload() {
        let json = r#"{"result": "error", "error-type": "unsupported-code"}"#;
        let response: RatesResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.result.as_deref(), Some("error"));
        assert_eq!(response.error_type.as_deref(), Some("unsupported-code"));
        assert!(response.rates.is_none());
    }

    #[test]
    fn test_films_payload_without_docs() {
        let response: FilmsResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(response.docs.is_none());
    }
}
