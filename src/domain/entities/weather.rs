//! Weather snapshot and the lookups used to present it.

use crate::domain::rounding::round_to_int;

const HPA_TO_MMHG: f64 = 0.750_062;

const COMPASS_LABELS: [&str; 8] = ["С", "СВ", "В", "ЮВ", "Ю", "ЮЗ", "З", "СЗ"];

/// Current conditions, already in display units.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Observation time, `YYYY-MM-DDTHH:MM` local.
    pub time: String,
    /// Air temperature, °C.
    pub temperature: i32,
    /// Feels-like temperature, °C.
    pub apparent_temperature: i32,
    /// Relative humidity, %.
    pub humidity: i32,
    /// Sea-level pressure, mmHg.
    pub pressure: i32,
    /// Wind speed, m/s.
    pub wind_speed: i32,
    /// Wind direction, degrees.
    pub wind_direction: f64,
    /// WMO weather code.
    pub weather_code: i32,
}

/// One day of the forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyForecast {
    /// Date, `YYYY-MM-DD`.
    pub time: String,
    /// WMO weather code.
    pub weather_code: i32,
    /// Daily maximum, °C.
    pub temperature_max: i32,
    /// Daily minimum, °C.
    pub temperature_min: i32,
}

/// Current conditions plus the daily forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Current conditions.
    pub current: CurrentWeather,
    /// Daily forecast in date order.
    pub daily: Vec<DailyForecast>,
}

impl WeatherSnapshot {
    /// Returns the fixed demonstration snapshot observed at `time`.
    #[must_use]
    pub fn demo(time: impl Into<String>) -> Self {
        const DAYS: [(&str, i32, i32, i32); 7] = [
            ("2024-01-15", 3, -3, -7),
            ("2024-01-16", 2, -2, -6),
            ("2024-01-17", 1, -1, -5),
            ("2024-01-18", 0, 0, -4),
            ("2024-01-19", 0, 1, -3),
            ("2024-01-20", 71, -1, -6),
            ("2024-01-21", 73, -4, -9),
        ];

        Self {
            current: CurrentWeather {
                time: time.into(),
                temperature: -5,
                apparent_temperature: -8,
                humidity: 85,
                pressure: 765,
                wind_speed: 4,
                wind_direction: 180.0,
                weather_code: 3,
            },
            daily: DAYS
                .iter()
                .map(|&(time, weather_code, temperature_max, temperature_min)| DailyForecast {
                    time: time.to_string(),
                    weather_code,
                    temperature_max,
                    temperature_min,
                })
                .collect(),
        }
    }
}

/// Human-readable weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCondition {
    /// Description.
    pub description: &'static str,
    /// Icon.
    pub icon: &'static str,
}

impl WeatherCondition {
    const fn new(description: &'static str, icon: &'static str) -> Self {
        Self { description, icon }
    }
}

/// Maps a WMO weather code to a description and icon.
///
/// Total over all integers; unlisted codes map to "unknown".
#[must_use]
pub const fn describe_weather_code(code: i32) -> WeatherCondition {
    match code {
        0 => WeatherCondition::new("Ясно", "☀️"),
        1 => WeatherCondition::new("Преимущественно ясно", "🌤️"),
        2 => WeatherCondition::new("Переменная облачность", "⛅"),
        3 => WeatherCondition::new("Пасмурно", "☁️"),
        45 | 48 => WeatherCondition::new("Туман", "🌫️"),
        51 | 53 | 55 => WeatherCondition::new("Морось", "🌧️"),
        56 | 57 => WeatherCondition::new("Ледяная морось", "🌨️"),
        61 | 63 | 65 => WeatherCondition::new("Дождь", "🌧️"),
        66 | 67 => WeatherCondition::new("Ледяной дождь", "🌨️"),
        71 | 73 | 75 => WeatherCondition::new("Снег", "❄️"),
        77 => WeatherCondition::new("Снежные зерна", "🌨️"),
        80..=82 => WeatherCondition::new("Ливень", "⛈️"),
        85 | 86 => WeatherCondition::new("Снегопад", "🌨️"),
        95 => WeatherCondition::new("Гроза", "⛈️"),
        96 | 99 => WeatherCondition::new("Гроза с градом", "⛈️🌨️"),
        _ => WeatherCondition::new("Неизвестно", "❓"),
    }
}

/// Maps a wind angle to one of eight compass labels.
///
/// The angle is divided by 45°, rounded half up to the nearest index and
/// wrapped, so 360° lands in the same bucket as 0°.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn wind_direction_label(degrees: f64) -> &'static str {
    let index = (degrees / 45.0 + 0.5).floor() as i64;
    #[allow(clippy::cast_sign_loss)]
    let index = index.rem_euclid(8) as usize;
    COMPASS_LABELS[index]
}

/// Converts hectopascals to whole millimetres of mercury.
#[must_use]
pub fn hpa_to_mmhg(hpa: f64) -> i32 {
    round_to_int(hpa * HPA_TO_MMHG)
}

/// Display colour band for a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    /// ≥ 30 °C.
    Scorching,
    /// ≥ 25 °C.
    Hot,
    /// ≥ 20 °C.
    Warm,
    /// ≥ 15 °C.
    Mild,
    /// ≥ 10 °C.
    Cool,
    /// ≥ 5 °C.
    Chilly,
    /// ≥ 0 °C.
    Cold,
    /// ≥ -10 °C.
    Frost,
    /// ≥ -20 °C.
    HardFrost,
    /// < -20 °C.
    Arctic,
}

impl TemperatureBand {
    /// Classifies a temperature in °C.
    #[must_use]
    pub fn from_celsius(temperature: f64) -> Self {
        match temperature {
            t if t >= 30.0 => Self::Scorching,
            t if t >= 25.0 => Self::Hot,
            t if t >= 20.0 => Self::Warm,
            t if t >= 15.0 => Self::Mild,
            t if t >= 10.0 => Self::Cool,
            t if t >= 5.0 => Self::Chilly,
            t if t >= 0.0 => Self::Cold,
            t if t >= -10.0 => Self::Frost,
            t if t >= -20.0 => Self::HardFrost,
            _ => Self::Arctic,
        }
    }

    /// Returns the band colour as RGB.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Scorching => (0xff, 0x00, 0x00),
            Self::Hot => (0xff, 0x6b, 0x6b),
            Self::Warm => (0xff, 0xa7, 0x26),
            Self::Mild => (0xff, 0xd1, 0x66),
            Self::Cool => (0x06, 0xd6, 0xa0),
            Self::Chilly => (0x11, 0x8a, 0xb2),
            Self::Cold => (0x07, 0x3b, 0x4c),
            Self::Frost => (0x4c, 0xc9, 0xf0),
            Self::HardFrost => (0x48, 0x95, 0xef),
            Self::Arctic => (0x43, 0x61, 0xee),
        }
    }
}
